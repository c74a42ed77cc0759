//! Collision detection and response
//!
//! Two primitives: ball vs. guard (circle/circle, the guard is immovable and
//! kicks the ball away) and ball vs. surface segment (plain bounce).

use glam::Vec2;

use super::{Ball, Guard, Surface};

/// Extra separation left after pushing a ball out of the guard
const SEPARATION_SLOP: f32 = 1e-5;

/// Ball/surface contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Closest point on the surface
    pub point: Vec2,
    /// Unit normal pointing from the surface toward the ball centre
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub depth: f32,
}

/// Mirror `velocity` across the plane with unit `normal`
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - normal * (2.0 * velocity.dot(normal))
}

/// Kick a ball that overlaps the guard.
///
/// The normal component of the ball's velocity is mirrored, the result is
/// scaled by `restitution` and the ball is moved just outside the combined
/// radius. Returns true if the ball was touching the guard.
pub fn resolve_guard_collision(ball: &mut Ball, guard: &Guard, restitution: f32) -> bool {
    let delta = guard.pos - ball.pos;
    let reach = guard.radius + ball.radius;
    if delta.length() >= reach {
        return false;
    }

    // Coincident centres: eject upward
    let n = delta.try_normalize().unwrap_or(Vec2::NEG_Y);

    // Tangential part kept, normal part flipped, then the whole kick scaled
    ball.vel = reflect_velocity(ball.vel, n) * restitution;
    ball.pos = guard.pos - n * (reach + SEPARATION_SLOP);

    log::trace!(
        "guard kicked ball to ({:.3}, {:.3}) vel ({:.2}, {:.2})",
        ball.pos.x,
        ball.pos.y,
        ball.vel.x,
        ball.vel.y
    );
    true
}

/// Check a ball against a surface segment
pub fn surface_contact(surface: &Surface, ball: &Ball) -> Option<Contact> {
    let point = surface.closest_point(ball.pos);
    let delta = ball.pos - point;
    let distance = delta.length();
    if distance >= ball.radius {
        return None;
    }

    // Centre exactly on the segment: push against the direction of travel
    let normal = match delta.try_normalize() {
        Some(n) => n,
        None => {
            let n = surface.normal();
            if n.dot(ball.vel) > 0.0 { -n } else { n }
        }
    };
    if normal == Vec2::ZERO {
        return None;
    }

    Some(Contact {
        point,
        normal,
        depth: ball.radius - distance,
    })
}

/// Push the ball out of a surface and reflect its approaching velocity
///
/// Only the normal component is scaled by `restitution`; sliding along the
/// surface is unaffected.
pub fn bounce(ball: &mut Ball, contact: &Contact, restitution: f32) {
    ball.pos += contact.normal * contact.depth;
    let vn = ball.vel.dot(contact.normal);
    if vn < 0.0 {
        ball.vel -= contact.normal * vn * (1.0 + restitution);
    }
}
