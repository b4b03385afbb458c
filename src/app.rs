use color_eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tracing::info;

use crate::audio::{AudioManager, SoundEffects};
use crate::config::GameConfig;
use crate::entities::{
    BulletController, Canvas, EnemyFormation, GameState, Player, ProjectileController,
    ProjectileOwner, Surface,
};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView, TerminalSurface};

const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game_state: GameState,
    config: GameConfig,
    canvas: Canvas,
    player: Player,
    formation: EnemyFormation,
    player_bullets: ProjectileController,
    enemy_bullets: ProjectileController,
    /// Frames info
    frame_count: u64,
    last_frame_time: Instant,
    fps: u32,
    /// Game timers
    game_start_time: Instant,
    final_time_secs: Option<u64>,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    sounds: Box<dyn SoundEffects>,
}

impl App {
    /// Construct a new instance of [`App`] playing through the default audio device.
    pub fn new(config: GameConfig, release_events: bool) -> Result<Self> {
        let sounds = AudioManager::new(&config.sounds_dir);
        Self::with_sounds(config, release_events, Box::new(sounds))
    }

    pub fn with_sounds(
        config: GameConfig,
        release_events: bool,
        sounds: Box<dyn SoundEffects>,
    ) -> Result<Self> {
        let canvas = config.canvas()?;
        let formation = new_formation(&config, canvas)?;
        let now = Instant::now();

        Ok(Self {
            running: true,
            game_state: GameState::Playing,
            player: Player::new(canvas, &config.player),
            formation,
            player_bullets: ProjectileController::new(
                canvas,
                ProjectileOwner::Player,
                &config.player_bullets,
            ),
            enemy_bullets: ProjectileController::new(
                canvas,
                ProjectileOwner::Enemy,
                &config.enemy_bullets,
            ),
            config,
            canvas,
            frame_count: 0,
            last_frame_time: now,
            fps: 0,
            game_start_time: now,
            final_time_secs: None,
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
            sounds,
        })
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn formation(&self) -> &EnemyFormation {
        &self.formation
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_bullets(&self) -> &ProjectileController {
        &self.player_bullets
    }

    pub fn enemy_bullets(&self) -> &ProjectileController {
        &self.enemy_bullets
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            self.input_manager.poll_events(&self.game_state)?;
            let actions = self.input_manager.get_actions(&self.game_state);
            self.process_actions(&actions);

            terminal.draw(|frame| {
                let area = frame.area();
                let play_area = self.renderer.play_area(area);
                {
                    let mut surface =
                        TerminalSurface::new(frame.buffer_mut(), play_area, self.canvas);
                    if self.game_state == GameState::Playing {
                        self.update_frame(&mut surface);
                    } else {
                        self.render_still(&mut surface);
                    }
                }

                let elapsed_time_secs = self
                    .final_time_secs
                    .unwrap_or_else(|| self.game_start_time.elapsed().as_secs());
                let view = RenderView {
                    game_state: self.game_state,
                    enemies_left: self.formation.len(),
                    direction: self.formation.direction(),
                    area,
                    fps: self.fps,
                    elapsed_time_secs,
                };
                self.renderer.render(frame, &view);
            })?;

            // Hold roughly 60 frames per second
            if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }

    /// Process input actions and update game state accordingly
    pub fn process_actions(&mut self, actions: &[InputAction]) {
        self.player.left_pressed = false;
        self.player.right_pressed = false;
        self.player.shoot_pressed = false;

        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Pause => {
                    self.game_state = GameState::Paused;
                }
                InputAction::Resume => {
                    self.game_state = GameState::Playing;
                }
                InputAction::Restart => {
                    if let Err(err) = self.restart() {
                        tracing::error!(%err, "restart failed");
                        self.running = false;
                    }
                }
                InputAction::MoveLeft => {
                    self.player.left_pressed = true;
                }
                InputAction::MoveRight => {
                    self.player.right_pressed = true;
                }
                InputAction::Fire => {
                    self.player.shoot_pressed = true;
                }
            }
        }
    }

    /// Advance the world one frame, drawing as it goes
    pub fn update_frame(&mut self, surface: &mut dyn Surface) {
        self.frame_count += 1;

        self.formation.draw(
            surface,
            &mut self.player_bullets,
            &mut self.enemy_bullets,
            self.sounds.as_mut(),
        );

        if self.player.draw(surface, &mut self.player_bullets)
            && self.player_bullets.sound_enabled()
        {
            self.sounds.player_shot();
        }

        self.player_bullets.draw(surface);
        self.enemy_bullets.draw(surface);

        self.check_game_over();
    }

    /// Draw everything where it stands
    pub fn render_still(&self, surface: &mut dyn Surface) {
        self.formation.render(surface);
        self.player.render(surface);
        self.player_bullets.render(surface);
        self.enemy_bullets.render(surface);
    }

    fn check_game_over(&mut self) {
        let outcome = if self.enemy_bullets.collide_with(&self.player)
            || self.formation.collide_with(&self.player)
        {
            GameState::GameOver
        } else if self.formation.is_empty() {
            GameState::Won
        } else {
            return;
        };

        info!(?outcome, frames = self.frame_count, "game finished");
        self.game_state = outcome;
        self.final_time_secs = Some(self.game_start_time.elapsed().as_secs());
    }

    fn restart(&mut self) -> Result<()> {
        self.formation = new_formation(&self.config, self.canvas)?;
        self.player = Player::new(self.canvas, &self.config.player);
        self.player_bullets = ProjectileController::new(
            self.canvas,
            ProjectileOwner::Player,
            &self.config.player_bullets,
        );
        self.enemy_bullets = ProjectileController::new(
            self.canvas,
            ProjectileOwner::Enemy,
            &self.config.enemy_bullets,
        );
        self.game_state = GameState::Playing;
        self.frame_count = 0;
        self.game_start_time = Instant::now();
        self.final_time_secs = None;
        info!("game restarted");
        Ok(())
    }
}

fn new_formation(config: &GameConfig, canvas: Canvas) -> Result<EnemyFormation> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(EnemyFormation::new(canvas, config.formation.clone(), rng)?)
}
