//! Data-driven simulation constants
//!
//! Every magic number the chambers rely on lives here with its default. The
//! whole struct round-trips through JSON so a host (or the demo binary) can
//! override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::easing::Easing;

/// How the guard forecasts ball positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PredictionModel {
    /// Unclamped projectile formula
    ClosedForm,
    /// Replay of the live fixed-step integrator (speed clamp included)
    #[default]
    Stepped,
}

impl PredictionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionModel::ClosedForm => "closed-form",
            PredictionModel::Stepped => "stepped",
        }
    }
}

/// Point-mass physics shared by every chamber
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Ball speed cap applied after every sub-step
    pub max_speed: f32,
    /// Integrator sub-step length in seconds
    pub step_len: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_speed: MAX_BALL_SPEED,
            step_len: STEP_LEN,
        }
    }
}

/// Guard chamber behaviour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardTuning {
    pub radius: f32,
    pub start: Vec2,
    /// Point the idle guard drifts back to
    pub rest_point: Vec2,
    /// Idle drift speed (units/s)
    pub centering_speed: f32,
    /// Distance under which the idle guard snaps onto `rest_point`
    pub snap_epsilon: f32,

    // === Targeting ===
    /// Seconds after a release before the next target search
    pub cooldown_threshold: f32,
    /// First candidate interception time tried by the search
    pub wanted_time_to_target: f32,
    /// Candidate times below this are rejected outright
    pub min_candidate_time: f32,
    /// Backward search decrement while the best candidate is out of bounds
    pub time_search_step: f32,
    /// Lead distance is `ball.radius + guard.radius - lead_epsilon`
    pub lead_epsilon: f32,
    /// Easing applied to the interpolation fraction
    pub easing: Easing,
    pub prediction: PredictionModel,

    // === Collision ===
    /// Ball velocity multiplier on a guard kick (>= 1 is an energetic kick)
    pub restitution: f32,
    /// Logical arena height used for the in-bounds test
    pub arena_height: f32,

    // === Render ===
    /// Draw the locked target and the path to it
    pub debug_overlay: bool,
}

impl Default for GuardTuning {
    fn default() -> Self {
        Self {
            radius: GUARD_RADIUS,
            start: Vec2::new(GUARD_START.0, GUARD_START.1),
            rest_point: Vec2::new(GUARD_REST.0, GUARD_REST.1),
            centering_speed: 1.5,
            snap_epsilon: 0.005,

            cooldown_threshold: 0.10,
            wanted_time_to_target: 0.20,
            min_candidate_time: 0.05,
            time_search_step: 0.01,
            lead_epsilon: 0.01,
            easing: Easing::QuadIn,
            prediction: PredictionModel::Stepped,

            restitution: GUARD_RESTITUTION,
            arena_height: ARENA_HEIGHT,

            debug_overlay: false,
        }
    }
}

/// Portals chamber layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalTuning {
    /// Half-length of the portal's major axis
    pub rad_x: f32,
    /// Half-length of the portal's minor axis
    pub rad_y: f32,
    /// Oscillate the orange portal between its anchors
    pub animate_orange: bool,
}

impl Default for PortalTuning {
    fn default() -> Self {
        Self {
            rad_x: 0.15,
            rad_y: 0.05,
            animate_orange: true,
        }
    }
}

/// Simple chamber layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceTuning {
    pub a: Vec2,
    pub b: Vec2,
    pub restitution: f32,
}

impl Default for SurfaceTuning {
    fn default() -> Self {
        Self {
            a: Vec2::new(0.2, 0.5),
            b: Vec2::new(0.8, 0.5),
            restitution: SURFACE_RESTITUTION,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub guard: GuardTuning,
    pub portals: PortalTuning,
    pub surface: SurfaceTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
