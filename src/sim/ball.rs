//! Ball layout shared with the host

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A ball as laid out in host memory: `pos.x, pos.y, radius, vel.x, vel.y`
///
/// The host creates and destroys balls; chambers only rewrite position and
/// velocity in place.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

impl Ball {
    pub const fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self { pos, radius, vel }
    }

    /// Spawn a ball somewhere in the upper half of the arena with a small
    /// random sideways velocity
    pub fn random_in<R: Rng>(rng: &mut R, radius: f32, arena_height: f32) -> Self {
        let x = rng.random_range(radius..1.0 - radius);
        let y = rng.random_range(arena_height * 0.5..arena_height - radius);
        let vx = rng.random_range(-0.5..0.5);
        Self::new(Vec2::new(x, y), radius, Vec2::new(vx, 0.0))
    }
}
