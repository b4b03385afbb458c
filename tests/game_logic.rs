//! Integration tests for game logic
//!
//! These tests drive the formation against the real bullet pools and the
//! headless application loop.

mod common;

use common::{CountingSurface, formation_from, full_map};
use invaders::app::App;
use invaders::audio::Silent;
use invaders::config::{BulletConfig, FormationConfig, GameConfig, PlayerConfig};
use invaders::input::InputAction;
use invaders::{
    BulletController, Canvas, EnemyType, GameState, MovingDirection, Player,
    ProjectileController, ProjectileOwner,
};

fn bullets(owner: ProjectileOwner, max: usize) -> ProjectileController {
    ProjectileController::new(
        Canvas::new(600, 600),
        owner,
        &BulletConfig {
            max_bullets_at_a_time: max,
            sound_enabled: false,
        },
    )
}

#[test]
fn test_single_enemy_reaches_right_edge() {
    let config = FormationConfig {
        enemy_width: 10,
        enemy_height: 10,
        ..FormationConfig::default()
    };
    let mut formation = formation_from(Canvas::new(15, 100), config, &[vec![1]]);
    let mut player_bullets = bullets(ProjectileOwner::Player, 10);
    let mut enemy_bullets = bullets(ProjectileOwner::Enemy, 4);
    let mut surface = CountingSurface::default();

    let mut frames = 0;
    while formation.direction() == MovingDirection::Right {
        frames += 1;
        formation.draw(
            &mut surface,
            &mut player_bullets,
            &mut enemy_bullets,
            &mut Silent,
        );
        assert!(frames <= 10, "never reached the edge");
    }

    // Five lateral frames bring the right edge to 15; the sixth turns down
    assert_eq!(frames, 6);
    assert_eq!(formation.direction(), MovingDirection::DownLeft);
    let enemy = &formation.rows()[0][0];
    assert_eq!((enemy.x, enemy.y), (5, 1));
    assert_eq!(surface.sprites, 6);
}

#[test]
fn test_player_bullet_destroys_exactly_one_enemy() {
    let mut formation = formation_from(
        Canvas::new(600, 600),
        FormationConfig::default(),
        &[vec![1, 2, 3]],
    );
    let mut player_bullets = bullets(ProjectileOwner::Player, 10);
    let mut enemy_bullets = bullets(ProjectileOwner::Enemy, 4);
    assert!(player_bullets.shoot(70, 10, 4, None));

    formation.draw(
        &mut CountingSurface::default(),
        &mut player_bullets,
        &mut enemy_bullets,
        &mut Silent,
    );

    assert!(player_bullets.projectiles().is_empty());
    let survivors: Vec<_> = formation.rows()[0]
        .iter()
        .map(|e| e.enemy_type)
        .collect();
    assert_eq!(survivors, vec![EnemyType::Basic, EnemyType::Tank]);
    assert_eq!(formation.len(), 2);
}

#[test]
fn test_enemy_fire_cadence_with_real_pool() {
    let mut formation = formation_from(
        Canvas::new(600, 600),
        FormationConfig::default(),
        &full_map(2, 3),
    );
    let mut player_bullets = bullets(ProjectileOwner::Player, 10);
    let mut enemy_bullets = bullets(ProjectileOwner::Enemy, 4);
    let mut surface = CountingSurface::default();

    let mut counts = Vec::new();
    for frame in 1..=300 {
        formation.draw(
            &mut surface,
            &mut player_bullets,
            &mut enemy_bullets,
            &mut Silent,
        );
        if matches!(frame, 99 | 100 | 199 | 200 | 299 | 300) {
            counts.push(enemy_bullets.projectiles().len());
        }
    }

    assert_eq!(counts, vec![0, 1, 1, 2, 2, 3]);
    assert!(
        enemy_bullets
            .projectiles()
            .iter()
            .all(|p| p.owner == ProjectileOwner::Enemy && p.velocity == -3)
    );
}

#[test]
fn test_formation_marches_down_onto_the_player() {
    let canvas = Canvas::new(600, 600);
    let mut formation = formation_from(canvas, FormationConfig::default(), &full_map(6, 9));
    let player = Player::new(canvas, &PlayerConfig::default());
    let mut player_bullets = bullets(ProjectileOwner::Player, 10);
    let mut enemy_bullets = bullets(ProjectileOwner::Enemy, 4);
    let mut surface = CountingSurface::default();

    let mut directions_seen = Vec::new();
    let mut frames = 0;
    while !formation.collide_with(&player) {
        formation.draw(
            &mut surface,
            &mut player_bullets,
            &mut enemy_bullets,
            &mut Silent,
        );
        if directions_seen.last() != Some(&formation.direction()) {
            directions_seen.push(formation.direction());
        }
        frames += 1;
        assert!(frames < 20_000, "formation never reached the player");
    }

    assert_eq!(
        &directions_seen[..5],
        &[
            MovingDirection::Right,
            MovingDirection::DownLeft,
            MovingDirection::Left,
            MovingDirection::DownRight,
            MovingDirection::Right,
        ]
    );
    assert_eq!(formation.len(), 54);
}

#[test]
fn test_headless_game_keeps_rows_non_empty() {
    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut app = App::with_sounds(config, true, Box::new(Silent)).expect("valid config");
    let mut surface = CountingSurface::default();
    let start = app.formation().len();

    for frame in 0..600 {
        // Sweep back and forth under the formation while firing
        let sweep = if (frame / 100) % 2 == 0 {
            InputAction::MoveLeft
        } else {
            InputAction::MoveRight
        };
        app.process_actions(&[sweep, InputAction::Fire]);
        if app.game_state() != GameState::Playing {
            break;
        }
        app.update_frame(&mut surface);

        assert!(app.formation().rows().iter().all(|row| !row.is_empty()));
        assert!(app.enemy_bullets().projectiles().len() <= 4);
        assert!(app.player_bullets().projectiles().len() <= 10);
        let player = app.player();
        assert!(player.x >= 0 && player.x + player.width <= 600);
    }

    assert!(app.formation().len() <= start);
}
