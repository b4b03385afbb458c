//! Game tunables. Defaults reproduce the classic arcade feel on a 600x600 canvas.
use std::path::PathBuf;

use crate::entities::Canvas;
use crate::error::{GameError, GameResult};

/// Tuning for the enemy grid
#[derive(Debug, Clone, PartialEq)]
pub struct FormationConfig {
    pub rows: usize,
    pub columns: usize,
    /// Horizontal distance between spawn columns
    pub column_spacing: i32,
    /// Vertical distance between spawn rows
    pub row_spacing: i32,
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub x_velocity: i32,
    pub y_velocity: i32,
    /// Frames spent moving down before resuming lateral motion
    pub move_down_timer_default: i32,
    /// Frames between enemy shots
    pub fire_bullet_timer_default: i32,
    /// Negative values travel down the screen
    pub bullet_velocity: i32,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 9,
            column_spacing: 50,
            row_spacing: 35,
            enemy_width: 44,
            enemy_height: 32,
            x_velocity: 1,
            y_velocity: 1,
            move_down_timer_default: 30,
            fire_bullet_timer_default: 100,
            bullet_velocity: -3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub width: i32,
    pub height: i32,
    pub velocity: i32,
    /// Distance of the ship's top edge from the bottom of the canvas
    pub bottom_offset: i32,
    pub bullet_velocity: i32,
    /// Frames the player bullet pool waits between shots
    pub fire_cooldown: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 48,
            velocity: 3,
            bottom_offset: 75,
            bullet_velocity: 4,
            fire_cooldown: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletConfig {
    pub max_bullets_at_a_time: usize,
    pub sound_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub formation: FormationConfig,
    pub player: PlayerConfig,
    pub player_bullets: BulletConfig,
    pub enemy_bullets: BulletConfig,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
    /// Directory holding `enemy-death.wav` and `shoot.wav`
    pub sounds_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 600,
            formation: FormationConfig::default(),
            player: PlayerConfig::default(),
            player_bullets: BulletConfig {
                max_bullets_at_a_time: 10,
                sound_enabled: true,
            },
            enemy_bullets: BulletConfig {
                max_bullets_at_a_time: 4,
                sound_enabled: false,
            },
            seed: None,
            sounds_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sounds")),
        }
    }
}

impl GameConfig {
    /// Defaults, with `INVADERS_SEED` applied when it parses as a u64 and
    /// `INVADERS_SOUNDS` replacing the sound directory when set
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var("INVADERS_SEED").ok().as_deref(),
            std::env::var_os("INVADERS_SOUNDS").map(PathBuf::from),
        )
    }

    fn with_overrides(mut self, seed: Option<&str>, sounds_dir: Option<PathBuf>) -> Self {
        if let Some(seed) = seed.and_then(|raw| raw.trim().parse::<u64>().ok()) {
            self.seed = Some(seed);
        }
        if let Some(dir) = sounds_dir {
            self.sounds_dir = dir;
        }
        self
    }

    pub fn canvas(&self) -> GameResult<Canvas> {
        if self.canvas_width <= 0 || self.canvas_height <= 0 {
            return Err(GameError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        Ok(Canvas::new(self.canvas_width, self.canvas_height))
    }
}
