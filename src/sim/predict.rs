//! Trajectory prediction
//!
//! Forecasts where a ball will be `horizon` seconds from now. The stepped
//! model replays [`integrate_state`] so its answer matches the live
//! simulation; the closed form ignores the speed cap.

use glam::Vec2;

use super::Ball;
use super::kinematics::integrate_state;
use crate::tuning::{PhysicsTuning, PredictionModel};

/// Predicted ball state at a future time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PredictionResult {
    pub pos: Vec2,
    pub velocity: Vec2,
}

impl PredictionResult {
    fn current(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            velocity: ball.vel,
        }
    }
}

/// Unclamped projectile motion under constant gravity
pub fn predict_closed_form(ball: &Ball, horizon: f32, gravity: f32) -> PredictionResult {
    if horizon <= 0.0 {
        return PredictionResult::current(ball);
    }
    let t = horizon;
    PredictionResult {
        pos: Vec2::new(
            ball.pos.x + ball.vel.x * t,
            ball.pos.y + ball.vel.y * t + 0.5 * gravity * t * t,
        ),
        velocity: Vec2::new(ball.vel.x, ball.vel.y + gravity * t),
    }
}

/// Fixed-step replay of the live integrator
pub fn predict_stepped(ball: &Ball, horizon: f32, physics: &PhysicsTuning) -> PredictionResult {
    if horizon <= 0.0 {
        return PredictionResult::current(ball);
    }
    let (pos, velocity) = integrate_state(ball.pos, ball.vel, horizon, physics);
    PredictionResult { pos, velocity }
}

/// Predict with the configured model
#[inline]
pub fn predict(
    ball: &Ball,
    horizon: f32,
    model: PredictionModel,
    physics: &PhysicsTuning,
) -> PredictionResult {
    match model {
        PredictionModel::ClosedForm => predict_closed_form(ball, horizon, physics.gravity),
        PredictionModel::Stepped => predict_stepped(ball, horizon, physics),
    }
}
