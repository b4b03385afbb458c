mod direction;
mod enemy;
mod formation;
mod game_state;
mod player;
mod projectile;
mod sprite;

// Re-export all public types
pub use direction::MovingDirection;
pub use enemy::{Enemy, EnemyType};
pub use formation::{EnemyFormation, EnemyMap, create_enemy_map};
pub use game_state::GameState;
pub use player::Player;
pub use projectile::{
    BulletController, PROJECTILE_HEIGHT, PROJECTILE_WIDTH, Projectile, ProjectileController,
    ProjectileOwner,
};
pub use sprite::{Bounds, Canvas, Collider, Sprite, Surface};
