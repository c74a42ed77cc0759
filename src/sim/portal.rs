//! Teleporting portals
//!
//! A portal is an ellipse whose major axis is the surface balls collide with.
//! Entering one portal puts the ball out of its partner, with position and
//! velocity carried into the exit portal's frame (turned around so the ball
//! leaves the exit face).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use super::easing::Easing;
use super::{Ball, Surface};
use crate::rotate;

/// An elliptical portal, optionally oscillating between two anchors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    pub pos: Vec2,
    start_pos: Vec2,
    end_pos: Vec2,
    /// ARGB colour
    pub color: u32,
    pub rad_x: f32,
    pub rad_y: f32,
    /// Major axis angle (radians)
    pub rotation: f32,
    /// Seconds for one leg of the oscillation
    movement_duration: f32,
    time_acc: f32,
    reversing: bool,
}

impl Portal {
    pub fn new(
        start_pos: Vec2,
        end_pos: Vec2,
        color: u32,
        radii: (f32, f32),
        rotation: f32,
        movement_duration: f32,
    ) -> Self {
        Self {
            pos: start_pos,
            start_pos,
            end_pos,
            color,
            rad_x: radii.0,
            rad_y: radii.1,
            rotation,
            movement_duration,
            time_acc: 0.0,
            reversing: false,
        }
    }

    /// The major axis, which is what balls collide with
    pub fn surface(&self) -> Surface {
        let axis = Vec2::from_angle(self.rotation) * self.rad_x;
        Surface::new(self.pos - axis, self.pos + axis)
    }

    /// Exit direction
    pub fn normal(&self) -> Vec2 {
        Vec2::from_angle(self.rotation + FRAC_PI_2)
    }

    /// Advance the back-and-forth motion between the anchors
    pub fn update(&mut self, dt: f32) {
        if self.movement_duration <= 0.0 {
            return;
        }
        if self.reversing {
            self.time_acc -= dt;
        } else {
            self.time_acc += dt;
        }
        self.time_acc = self.time_acc.clamp(0.0, self.movement_duration);

        let t = self.time_acc / self.movement_duration;
        self.pos = self
            .start_pos
            .lerp(self.end_pos, Easing::SineInOut.apply(t));

        if self.time_acc == 0.0 || self.time_acc == self.movement_duration {
            self.reversing = !self.reversing;
        }
    }

    /// Map a point relative to this portal onto `exit`
    pub fn transfer_point(&self, point: Vec2, exit: &Portal) -> Vec2 {
        exit.pos + rotate(point - self.pos, self.turn_to(exit))
    }

    /// Rotation that carries this portal's frame onto `exit`, facing out
    #[inline]
    fn turn_to(&self, exit: &Portal) -> f32 {
        exit.rotation - self.rotation + PI
    }
}

/// Move a ball from `entrance` to `exit`, rotating its velocity with it and
/// pushing it clear of the exit surface
pub fn teleport(ball: &mut Ball, entrance: &Portal, exit: &Portal) {
    ball.pos = entrance.transfer_point(ball.pos, exit);
    ball.vel = rotate(ball.vel, entrance.turn_to(exit));
    ball.pos += exit.normal() * ball.radius * 2.0;

    log::trace!("ball teleported to ({:.3}, {:.3})", ball.pos.x, ball.pos.y);
}
