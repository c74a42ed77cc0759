//! Simulation module
//!
//! Everything that moves balls or the guard lives here. No rendering or
//! platform dependencies:
//! - Positions are logical (`x` in [0, 1], `y` up)
//! - Balls are only ever touched through `&mut [Ball]` views
//! - Degenerate geometry is skipped, never panics

pub mod ball;
pub mod collision;
pub mod easing;
pub mod guard;
pub mod kinematics;
pub mod portal;
pub mod predict;
pub mod surface;
pub mod target;

pub use ball::Ball;
pub use collision::{Contact, bounce, reflect_velocity, resolve_guard_collision, surface_contact};
pub use easing::Easing;
pub use guard::{Guard, GuardPhase, Target};
pub use kinematics::{apply_gravity, clamp_velocity, integrate};
pub use portal::{Portal, teleport};
pub use predict::{PredictionResult, predict, predict_closed_form, predict_stepped};
pub use surface::Surface;
pub use target::{Lock, QueryState, TargetQuery, find_target, search_target};
