//! Recording fakes for the formation's collaborators

use crate::audio::SoundEffects;
use crate::entities::{Bounds, BulletController, Collider, Sprite, Surface};

pub struct NullSurface;

impl Surface for NullSurface {
    fn draw_sprite(&mut self, _sprite: Sprite, _bounds: Bounds) {}
}

/// Records spawn requests and reports hits against a fixed set of boxes.
/// A box that scores a hit is consumed, like a real bullet.
#[derive(Default)]
pub struct RecordingBullets {
    pub hit_boxes: Vec<Bounds>,
    pub shots: Vec<(i32, i32, i32, Option<i32>)>,
    pub queries: usize,
}

impl RecordingBullets {
    pub fn with_hit_boxes(hit_boxes: Vec<Bounds>) -> Self {
        Self {
            hit_boxes,
            ..Self::default()
        }
    }
}

impl BulletController for RecordingBullets {
    fn shoot(&mut self, x: i32, y: i32, velocity: i32, cooldown: Option<i32>) -> bool {
        self.shots.push((x, y, velocity, cooldown));
        true
    }

    fn collide_with(&mut self, sprite: &dyn Collider) -> bool {
        self.queries += 1;
        let target = sprite.bounds();
        match self.hit_boxes.iter().position(|b| b.intersects(&target)) {
            Some(index) => {
                self.hit_boxes.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Default)]
pub struct CountingSounds {
    pub deaths: usize,
    pub shots: usize,
}

impl SoundEffects for CountingSounds {
    fn enemy_death(&mut self) {
        self.deaths += 1;
    }

    fn player_shot(&mut self) {
        self.shots += 1;
    }
}
