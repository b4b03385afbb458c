use super::enemy::EnemyType;
use super::projectile::ProjectileOwner;

/// Logical play field in pixel units, independent of the terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        other.x < self.x + self.width
            && other.x + other.width > self.x
            && other.y < self.y + self.height
            && other.y + other.height > self.y
    }
}

/// Anything with a hit box
pub trait Collider {
    fn bounds(&self) -> Bounds;
}

impl Collider for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// What a [`Surface`] is asked to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Enemy(EnemyType),
    Player,
    Projectile(ProjectileOwner),
}

/// Drawing target. Coordinates are canvas pixels; implementors do any scaling.
pub trait Surface {
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Bounds);
}
