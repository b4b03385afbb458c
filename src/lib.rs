// Library exports for testing
pub use entities::{
    Bounds, BulletController, Canvas, Collider, Enemy, EnemyFormation, EnemyMap, EnemyType,
    GameState, MovingDirection, Player, Projectile, ProjectileController, ProjectileOwner, Sprite,
    Surface, create_enemy_map,
};
pub use error::{GameError, GameResult};

pub mod app;
pub mod audio;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod renderer;

#[cfg(test)]
mod test_utils;
