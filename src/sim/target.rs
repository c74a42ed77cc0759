//! Target selection
//!
//! Picks the ball the guard should intercept: the approaching ball whose
//! predicted position at the candidate time is closest to the guard, as long
//! as that position keeps the guard inside the arena.

use glam::Vec2;

use super::predict::{PredictionResult, predict};
use super::{Ball, Guard};
use crate::tuning::{GuardTuning, PhysicsTuning};

/// Outcome of a single selector query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    /// Nothing approaching, or too little time to react
    NotFound,
    /// Best approaching ball would pull the guard out of the arena
    OutOfBounds,
    /// In-bounds interception candidate
    Found,
}

/// Selector result: the chosen ball index and its prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetQuery {
    pub state: QueryState,
    pub ball: Option<usize>,
    pub prediction: PredictionResult,
}

impl TargetQuery {
    pub fn not_found() -> Self {
        Self {
            state: QueryState::NotFound,
            ball: None,
            prediction: PredictionResult::default(),
        }
    }
}

/// A successful search: which ball, where it will be, and when
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lock {
    pub ball: usize,
    pub prediction: PredictionResult,
    pub time_to_target: f32,
}

/// True if the ball's velocity points toward the guard
#[inline]
pub fn is_moving_towards(ball: &Ball, guard_pos: Vec2) -> bool {
    ball.vel.dot(ball.pos - guard_pos) < 0.0
}

/// True if `pos` lies inside the arena shrunk by `inset` on every side
#[inline]
pub fn in_bounds(pos: Vec2, inset: f32, arena_height: f32) -> bool {
    pos.x >= inset && pos.x <= 1.0 - inset && pos.y >= inset && pos.y <= arena_height - inset
}

struct Candidate {
    index: usize,
    distance: f32,
    prediction: PredictionResult,
}

/// Query every ball once for `candidate_time`
pub fn find_target(
    balls: &[Ball],
    guard: &Guard,
    candidate_time: f32,
    tuning: &GuardTuning,
    physics: &PhysicsTuning,
) -> TargetQuery {
    if candidate_time < tuning.min_candidate_time {
        return TargetQuery::not_found();
    }

    let mut best_found: Option<Candidate> = None;
    let mut best_out: Option<Candidate> = None;

    for (index, ball) in balls.iter().enumerate() {
        if !is_moving_towards(ball, guard.pos) {
            continue;
        }
        let prediction = predict(ball, candidate_time, tuning.prediction, physics);
        let distance = guard.pos.distance(prediction.pos);
        let candidate = Candidate {
            index,
            distance,
            prediction,
        };

        let slot = if in_bounds(prediction.pos, guard.radius, tuning.arena_height) {
            &mut best_found
        } else {
            &mut best_out
        };
        if slot.as_ref().is_none_or(|best| distance < best.distance) {
            *slot = Some(candidate);
        }
    }

    match (best_found, best_out) {
        (Some(c), _) => TargetQuery {
            state: QueryState::Found,
            ball: Some(c.index),
            prediction: c.prediction,
        },
        (None, Some(c)) => TargetQuery {
            state: QueryState::OutOfBounds,
            ball: Some(c.index),
            prediction: c.prediction,
        },
        (None, None) => TargetQuery::not_found(),
    }
}

/// Search backward in time from `wanted_time_to_target` until an in-bounds
/// candidate shows up or the candidate time drops below the threshold
pub fn search_target(
    balls: &[Ball],
    guard: &Guard,
    tuning: &GuardTuning,
    physics: &PhysicsTuning,
) -> Option<Lock> {
    let floor = tuning.min_candidate_time.max(0.0);
    let mut time = tuning.wanted_time_to_target;

    while time >= floor {
        let query = find_target(balls, guard, time, tuning, physics);
        match (query.state, query.ball) {
            (QueryState::Found, Some(ball)) => {
                return Some(Lock {
                    ball,
                    prediction: query.prediction,
                    time_to_target: time,
                });
            }
            (QueryState::OutOfBounds, _) if tuning.time_search_step > 0.0 => {
                time -= tuning.time_search_step;
            }
            _ => return None,
        }
    }
    None
}
