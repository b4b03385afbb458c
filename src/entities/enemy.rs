use super::sprite::{Bounds, Collider, Sprite, Surface};
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyType {
    Basic,
    Fast,
    Tank,
}

impl EnemyType {
    /// Maps a density-map cell to a variant. `Ok(None)` is an empty cell.
    pub fn from_cell(value: u8, row: usize, col: usize) -> GameResult<Option<Self>> {
        match value {
            0 => Ok(None),
            1 => Ok(Some(EnemyType::Basic)),
            2 => Ok(Some(EnemyType::Fast)),
            3 => Ok(Some(EnemyType::Tank)),
            _ => Err(GameError::InvalidEnemyVariant { row, col, value }),
        }
    }

    pub fn variant(&self) -> u8 {
        match self {
            EnemyType::Basic => 1,
            EnemyType::Fast => 2,
            EnemyType::Tank => 3,
        }
    }

    pub fn get_sprite_lines(&self) -> [&'static str; 3] {
        match self {
            EnemyType::Basic => ["  \\|/  ", " {===} ", "  /_\\  "],
            EnemyType::Fast => ["  <*>  ", " <|||> ", "  <*>  "],
            EnemyType::Tank => [" [===] ", " |###| ", " [===] "],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub enemy_type: EnemyType,
}

impl Enemy {
    pub fn new(x: i32, y: i32, width: i32, height: i32, enemy_type: EnemyType) -> Self {
        Self {
            x,
            y,
            width,
            height,
            enemy_type,
        }
    }

    /// Enemies never move on their own; the formation passes its shared velocity here
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(Sprite::Enemy(self.enemy_type), self.bounds());
    }

    pub fn collide_with<C: Collider + ?Sized>(&self, sprite: &C) -> bool {
        self.bounds().intersects(&sprite.bounds())
    }
}

impl Collider for Enemy {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}
