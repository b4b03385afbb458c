//! Integration test harness.
//!
//! Keep integration tests headless: sprites are counted, not painted.

#![allow(dead_code)]

use invaders::config::FormationConfig;
use invaders::{Bounds, Canvas, EnemyFormation, Sprite, Surface};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
pub struct CountingSurface {
    pub sprites: usize,
}

impl Surface for CountingSurface {
    fn draw_sprite(&mut self, _sprite: Sprite, _bounds: Bounds) {
        self.sprites += 1;
    }
}

pub fn formation_from(canvas: Canvas, config: FormationConfig, map: &[Vec<u8>]) -> EnemyFormation {
    EnemyFormation::from_map(canvas, config, StdRng::seed_from_u64(11), map).expect("valid map")
}

pub fn full_map(rows: usize, columns: usize) -> Vec<Vec<u8>> {
    vec![vec![1; columns]; rows]
}
