//! Point-mass kinematics
//!
//! The live simulation and the stepped predictor both go through
//! [`integrate`], so a forecast over `t` seconds lands exactly where the ball
//! will be after `t` seconds of frames.

use glam::Vec2;

use super::Ball;
use crate::tuning::PhysicsTuning;

/// Add `gravity * dt` to the vertical velocity
#[inline]
pub fn apply_gravity(ball: &mut Ball, dt: f32, gravity: f32) {
    ball.vel.y += gravity * dt;
}

/// Rescale `vel` to `max_speed` if it is faster, keeping its direction
#[inline]
pub fn clamp_velocity(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed_sq = vel.length_squared();
    if speed_sq > max_speed * max_speed {
        vel * (max_speed / speed_sq.sqrt())
    } else {
        vel
    }
}

/// One integrator sub-step: gravity, speed clamp, then position
#[inline]
fn substep(pos: &mut Vec2, vel: &mut Vec2, h: f32, physics: &PhysicsTuning) {
    vel.y += physics.gravity * h;
    *vel = clamp_velocity(*vel, physics.max_speed);
    *pos += *vel * h;
}

/// Advance position and velocity by `dt` using fixed sub-steps of
/// `physics.step_len` plus one partial sub-step for the remainder.
pub fn integrate_state(pos: Vec2, vel: Vec2, dt: f32, physics: &PhysicsTuning) -> (Vec2, Vec2) {
    let (mut pos, mut vel) = (pos, vel);
    if dt <= 0.0 {
        return (pos, vel);
    }
    if physics.step_len <= 0.0 {
        substep(&mut pos, &mut vel, dt, physics);
        return (pos, vel);
    }

    let steps = (dt / physics.step_len) as u32;
    for _ in 0..steps {
        substep(&mut pos, &mut vel, physics.step_len, physics);
    }

    let remainder = dt - steps as f32 * physics.step_len;
    if remainder > 0.0 {
        substep(&mut pos, &mut vel, remainder, physics);
    }
    (pos, vel)
}

/// Advance a ball in place by `dt`
pub fn integrate(ball: &mut Ball, dt: f32, physics: &PhysicsTuning) {
    let (pos, vel) = integrate_state(ball.pos, ball.vel, dt, physics);
    ball.pos = pos;
    ball.vel = vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_apply_gravity() {
        let mut ball = Ball::new(Vec2::new(0.5, 0.5), 0.02, Vec2::new(0.3, 0.0));
        apply_gravity(&mut ball, 0.1, GRAVITY);
        assert!((ball.vel.y - GRAVITY * 0.1).abs() < 1e-6);
        assert_eq!(ball.vel.x, 0.3);
        assert_eq!(ball.pos, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_clamp_velocity_preserves_direction() {
        let v = clamp_velocity(Vec2::new(3.0, 4.0), MAX_BALL_SPEED);
        assert!((v.length() - MAX_BALL_SPEED).abs() < 1e-5);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);

        let slow = Vec2::new(0.1, -0.2);
        assert_eq!(clamp_velocity(slow, MAX_BALL_SPEED), slow);
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let physics = PhysicsTuning::default();
        let mut ball = Ball::new(Vec2::new(0.2, 0.4), 0.02, Vec2::new(1.0, 1.0));
        let before = ball;
        integrate(&mut ball, 0.0, &physics);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_integrate_falls_and_caps_speed() {
        let physics = PhysicsTuning::default();
        let mut ball = Ball::new(Vec2::new(0.5, 0.5), 0.02, Vec2::ZERO);
        integrate(&mut ball, 0.05, &physics);
        assert!(ball.pos.y < 0.5);
        assert!(ball.vel.y < 0.0);

        // Long enough to hit the speed cap
        integrate(&mut ball, 1.0, &physics);
        assert!(ball.vel.length() <= MAX_BALL_SPEED + 1e-4);
    }

    #[test]
    fn test_integrate_close_to_closed_form_before_cap() {
        let physics = PhysicsTuning::default();
        let mut ball = Ball::new(Vec2::new(0.5, 0.5), 0.02, Vec2::ZERO);
        let t = 0.1;
        integrate(&mut ball, t, &physics);
        let expected = 0.5 + 0.5 * GRAVITY * t * t;
        // Semi-implicit Euler drifts by at most g * t * step_len
        assert!((ball.pos.y - expected).abs() < 2e-3);
    }
}
