use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::direction::MovingDirection;
use super::enemy::{Enemy, EnemyType};
use super::projectile::BulletController;
use super::sprite::{Canvas, Collider, Surface};
use crate::audio::SoundEffects;
use crate::config::FormationConfig;
use crate::error::GameResult;

/// Density map: one cell per grid slot, 0 = empty, 1..=3 = enemy variant
pub type EnemyMap = Vec<Vec<u8>>;

/// Random density map with every cell drawn uniformly from 0..=3
pub fn create_enemy_map<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: usize) -> EnemyMap {
    (0..rows)
        .map(|_| (0..columns).map(|_| rng.random_range(0..=3u8)).collect())
        .collect()
}

/// The enemy grid and the state machine that marches it across the canvas.
///
/// Rows keep spawn order and each row keeps left-to-right column order, so the
/// first and last enemy of a row are its left and right extremes. Empty rows
/// are never kept.
#[derive(Debug, Clone)]
pub struct EnemyFormation {
    canvas: Canvas,
    config: FormationConfig,
    rows: Vec<Vec<Enemy>>,
    direction: MovingDirection,
    velocity: (i32, i32),
    move_down_timer: i32,
    fire_bullet_timer: i32,
    rng: StdRng,
}

impl EnemyFormation {
    /// Builds a formation from a freshly generated density map
    pub fn new(canvas: Canvas, config: FormationConfig, mut rng: StdRng) -> GameResult<Self> {
        let map = create_enemy_map(&mut rng, config.rows, config.columns);
        Self::from_map(canvas, config, rng, &map)
    }

    /// Builds a formation from an explicit density map, rejecting unknown variants
    pub fn from_map(
        canvas: Canvas,
        config: FormationConfig,
        rng: StdRng,
        map: &[Vec<u8>],
    ) -> GameResult<Self> {
        let mut rows = Vec::with_capacity(map.len());
        for (row_index, cells) in map.iter().enumerate() {
            let mut row = Vec::new();
            for (col_index, &cell) in cells.iter().enumerate() {
                if let Some(enemy_type) = EnemyType::from_cell(cell, row_index, col_index)? {
                    row.push(Enemy::new(
                        col_index as i32 * config.column_spacing,
                        row_index as i32 * config.row_spacing,
                        config.enemy_width,
                        config.enemy_height,
                        enemy_type,
                    ));
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        debug!(
            rows = rows.len(),
            enemies = rows.iter().map(Vec::len).sum::<usize>(),
            "formation created"
        );

        Ok(Self {
            canvas,
            move_down_timer: config.move_down_timer_default,
            fire_bullet_timer: config.fire_bullet_timer_default,
            config,
            rows,
            direction: MovingDirection::Right,
            velocity: (0, 0),
            rng,
        })
    }

    pub fn rows(&self) -> &[Vec<Enemy>] {
        &self.rows
    }

    /// Every surviving enemy, row by row, left to right
    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn direction(&self) -> MovingDirection {
        self.direction
    }

    pub fn velocity(&self) -> (i32, i32) {
        self.velocity
    }

    pub fn move_down_timer(&self) -> i32 {
        self.move_down_timer
    }

    pub fn fire_bullet_timer(&self) -> i32 {
        self.fire_bullet_timer
    }

    /// Advances the formation one frame. Call exactly once per frame.
    pub fn draw(
        &mut self,
        surface: &mut dyn Surface,
        player_bullets: &mut dyn BulletController,
        enemy_bullets: &mut dyn BulletController,
        sounds: &mut dyn SoundEffects,
    ) {
        self.decrement_move_down_timer();
        self.update_velocity_and_direction();
        self.collision_detection(player_bullets, sounds);
        self.draw_enemies(surface);
        self.reset_move_down_timer();
        self.fire_bullet(enemy_bullets);
    }

    /// Draws every enemy where it stands, without advancing any state
    pub fn render(&self, surface: &mut dyn Surface) {
        for enemy in self.enemies() {
            enemy.draw(surface);
        }
    }

    pub fn decrement_move_down_timer(&mut self) {
        if self.direction.is_descending() {
            self.move_down_timer -= 1;
        }
    }

    /// Applies at most one phase transition, then sets the shared velocity
    /// to the velocity of whichever phase is now in force.
    pub fn update_velocity_and_direction(&mut self) {
        let canvas_width = self.canvas.width;
        let triggered = match self.direction {
            // Any row will do: every row moves by the same velocity
            MovingDirection::Right => self
                .rows
                .iter()
                .filter_map(|row| row.last())
                .any(|enemy| enemy.x + enemy.width >= canvas_width),
            MovingDirection::Left => self
                .rows
                .iter()
                .filter_map(|row| row.first())
                .any(|enemy| enemy.x <= 0),
            MovingDirection::DownLeft | MovingDirection::DownRight => self.move_down_timer <= 0,
        };

        if triggered {
            let next = self.direction.next();
            debug!(from = ?self.direction, to = ?next, "formation changed direction");
            self.direction = next;
        }

        self.velocity = self
            .direction
            .velocity(self.config.x_velocity, self.config.y_velocity);
    }

    /// Removes every enemy hit by a player bullet. Returns how many died.
    pub fn collision_detection(
        &mut self,
        player_bullets: &mut dyn BulletController,
        sounds: &mut dyn SoundEffects,
    ) -> usize {
        let mut destroyed = 0;
        for row in &mut self.rows {
            // retain visits each enemy exactly once and keeps survivor order
            row.retain(|enemy| {
                if player_bullets.collide_with(enemy) {
                    trace!(x = enemy.x, y = enemy.y, "enemy destroyed");
                    sounds.enemy_death();
                    destroyed += 1;
                    false
                } else {
                    true
                }
            });
        }
        self.rows.retain(|row| !row.is_empty());
        destroyed
    }

    pub fn draw_enemies(&mut self, surface: &mut dyn Surface) {
        let (dx, dy) = self.velocity;
        for enemy in self.rows.iter_mut().flatten() {
            enemy.move_by(dx, dy);
            enemy.draw(surface);
        }
    }

    pub fn reset_move_down_timer(&mut self) {
        if self.move_down_timer <= 0 {
            self.move_down_timer = self.config.move_down_timer_default;
        }
    }

    /// Counts down to the next shot and fires from a random survivor.
    /// Returns whether a shot was requested this frame.
    pub fn fire_bullet(&mut self, enemy_bullets: &mut dyn BulletController) -> bool {
        self.fire_bullet_timer -= 1;
        if self.fire_bullet_timer > 0 {
            return false;
        }
        self.fire_bullet_timer = self.config.fire_bullet_timer_default;

        let total = self.len();
        if total == 0 {
            debug!("formation empty, skipping enemy fire");
            return false;
        }

        let index = self.rng.random_range(0..total);
        let Some(enemy) = self.enemies().nth(index) else {
            return false;
        };
        let (x, y) = (enemy.x, enemy.y);
        trace!(index, x, y, "enemy fired");
        enemy_bullets.shoot(x, y, self.config.bullet_velocity, None);
        true
    }

    /// Whether any surviving enemy overlaps `sprite`
    pub fn collide_with(&self, sprite: &dyn Collider) -> bool {
        self.enemies().any(|enemy| enemy.collide_with(sprite))
    }
}
