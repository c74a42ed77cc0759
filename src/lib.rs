//! Chambers - physics mini-simulations for a WASM ball host
//!
//! Core modules:
//! - `sim`: Ball kinematics, trajectory prediction, guard AI, collisions, portals
//! - `chamber`: The `Chamber` contract and its implementations
//! - `renderer`: Flat pixel buffer drawing (canvas view, images, sprites)
//! - `session`: Host-facing context owning ball/canvas/save memory
//! - `persistence`: Save blob encoding
//! - `platform`: WASM exports
//! - `tuning`: Data-driven simulation constants

pub mod chamber;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use chamber::{Chamber, ChamberKind};
pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Simulation constants (defaults for [`tuning::Tuning`])
pub mod consts {
    /// Gravity acceleration along y (units/s²), y points up
    pub const GRAVITY: f32 = -9.832;
    /// Ball speed cap (units/s)
    pub const MAX_BALL_SPEED: f32 = 2.5;
    /// Fixed integrator sub-step, matches the host's ball stepper
    pub const STEP_LEN: f32 = 1.666666 / 1300.0;

    /// Logical arena height (width is always 1.0)
    pub const ARENA_HEIGHT: f32 = 0.7;

    /// Guard defaults
    pub const GUARD_RADIUS: f32 = 0.035;
    pub const GUARD_START: (f32, f32) = (0.5, 0.5);
    pub const GUARD_REST: (f32, f32) = (0.5, ARENA_HEIGHT / 2.0);
    /// Speed multiplier applied to a ball kicked by the guard
    pub const GUARD_RESTITUTION: f32 = 4.0;

    /// Restitution for plain surface bounces
    pub const SURFACE_RESTITUTION: f32 = 0.9;
}

/// Convert a logical position to pixel coordinates.
///
/// Both axes scale with the canvas width; y is flipped so that `y = 0` is the
/// bottom row.
#[inline]
pub fn pos_to_pixel(pos: Vec2, canvas_width: usize, canvas_height: usize) -> Vec2 {
    let w = canvas_width as f32;
    Vec2::new(pos.x * w, canvas_height as f32 - pos.y * w)
}

/// Rotate a vector counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_pos_to_pixel_flips_y() {
        let p = pos_to_pixel(Vec2::new(0.5, 0.0), 200, 140);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 140.0).abs() < 1e-4);

        let top = pos_to_pixel(Vec2::new(0.0, 0.7), 200, 140);
        assert!(top.y.abs() < 1e-3);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }
}
