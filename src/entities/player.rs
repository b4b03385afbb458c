use super::projectile::BulletController;
use super::sprite::{Bounds, Canvas, Collider, Sprite, Surface};
use crate::config::PlayerConfig;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub right_pressed: bool,
    pub left_pressed: bool,
    pub shoot_pressed: bool,
    velocity: i32,
    bullet_velocity: i32,
    fire_cooldown: i32,
    canvas: Canvas,
}

impl Player {
    pub fn new(canvas: Canvas, config: &PlayerConfig) -> Self {
        Self {
            x: canvas.width / 2,
            y: canvas.height - config.bottom_offset,
            width: config.width,
            height: config.height,
            right_pressed: false,
            left_pressed: false,
            shoot_pressed: false,
            velocity: config.velocity,
            bullet_velocity: config.bullet_velocity,
            fire_cooldown: config.fire_cooldown,
            canvas,
        }
    }

    /// Right wins when both directions are held
    pub fn move_horizontally(&mut self) {
        if self.right_pressed {
            self.x += self.velocity;
        } else if self.left_pressed {
            self.x -= self.velocity;
        }
    }

    pub fn collide_with_walls(&mut self) {
        let max_x = self.canvas.width - self.width;
        if self.x > max_x {
            self.x = max_x;
        }
        if self.x < 0 {
            self.x = 0;
        }
    }

    /// Attempts to fire from the nose of the ship.
    /// The bullet pool's own cooldown decides whether a shot is spawned.
    pub fn try_fire(&self, bullets: &mut dyn BulletController) -> bool {
        bullets.shoot(
            self.x + self.width / 2,
            self.y,
            self.bullet_velocity,
            Some(self.fire_cooldown),
        )
    }

    /// Advances the player one frame. Returns whether a bullet was spawned.
    pub fn draw(&mut self, surface: &mut dyn Surface, bullets: &mut dyn BulletController) -> bool {
        self.move_horizontally();
        self.collide_with_walls();
        let fired = self.shoot_pressed && self.try_fire(bullets);
        self.render(surface);
        fired
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(Sprite::Player, self.bounds());
    }
}

impl Collider for Player {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}
