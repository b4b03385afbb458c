use super::sprite::{Bounds, Canvas, Collider, Sprite, Surface};
use crate::config::BulletConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

pub const PROJECTILE_WIDTH: i32 = 5;
pub const PROJECTILE_HEIGHT: i32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    /// Positive travels up the screen, negative travels down
    pub velocity: i32,
    pub owner: ProjectileOwner,
}

impl Projectile {
    pub fn new(x: i32, y: i32, velocity: i32, owner: ProjectileOwner) -> Self {
        Self {
            x,
            y,
            velocity,
            owner,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.velocity;
    }

    pub fn is_out_of_bounds(&self, canvas: &Canvas) -> bool {
        self.y + PROJECTILE_HEIGHT <= 0 || self.y > canvas.height
    }
}

impl Collider for Projectile {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

/// Spawn and hit-test interface the formation and player rely on
pub trait BulletController {
    /// Requests a new bullet. Returns whether one was actually spawned.
    fn shoot(&mut self, x: i32, y: i32, velocity: i32, cooldown: Option<i32>) -> bool;

    /// Consumes the first bullet overlapping `sprite`, if any
    fn collide_with(&mut self, sprite: &dyn Collider) -> bool;
}

/// Bounded pool of live projectiles for one side of the fight
#[derive(Debug, Clone)]
pub struct ProjectileController {
    canvas: Canvas,
    owner: ProjectileOwner,
    max_bullets_at_a_time: usize,
    sound_enabled: bool,
    time_till_next_bullet_allowed: i32,
    projectiles: Vec<Projectile>,
}

impl ProjectileController {
    pub fn new(canvas: Canvas, owner: ProjectileOwner, config: &BulletConfig) -> Self {
        Self {
            canvas,
            owner,
            max_bullets_at_a_time: config.max_bullets_at_a_time,
            sound_enabled: config.sound_enabled,
            time_till_next_bullet_allowed: 0,
            projectiles: Vec::new(),
        }
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Advances every projectile one frame and draws it
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        let canvas = self.canvas;
        self.projectiles.retain(|p| !p.is_out_of_bounds(&canvas));

        for projectile in &mut self.projectiles {
            projectile.update();
            surface.draw_sprite(Sprite::Projectile(projectile.owner), projectile.bounds());
        }

        if self.time_till_next_bullet_allowed > 0 {
            self.time_till_next_bullet_allowed -= 1;
        }
    }

    /// Draws without advancing
    pub fn render(&self, surface: &mut dyn Surface) {
        for projectile in &self.projectiles {
            surface.draw_sprite(Sprite::Projectile(projectile.owner), projectile.bounds());
        }
    }
}

impl BulletController for ProjectileController {
    fn shoot(&mut self, x: i32, y: i32, velocity: i32, cooldown: Option<i32>) -> bool {
        if self.time_till_next_bullet_allowed > 0
            || self.projectiles.len() >= self.max_bullets_at_a_time
        {
            return false;
        }

        self.projectiles.push(Projectile::new(x, y, velocity, self.owner));
        self.time_till_next_bullet_allowed = cooldown.unwrap_or(0);
        true
    }

    fn collide_with(&mut self, sprite: &dyn Collider) -> bool {
        let target = sprite.bounds();
        match self
            .projectiles
            .iter()
            .position(|p| p.bounds().intersects(&target))
        {
            Some(index) => {
                self.projectiles.remove(index);
                true
            }
            None => false,
        }
    }
}
