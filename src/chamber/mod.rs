//! The chamber contract
//!
//! A chamber is one self-contained simulation variant. The host drives it
//! with `step` then `render` once per frame and may snapshot it with
//! `save`/`load`.

pub mod guard;
pub mod portals;
pub mod simple;

pub use guard::GuardChamber;
pub use portals::PortalsChamber;
pub use simple::SimpleChamber;

use crate::persistence::PersistError;
use crate::renderer::Canvas;
use crate::sim::Ball;
use crate::tuning::Tuning;

/// One simulation variant
pub trait Chamber {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Advance by `dt` seconds. `balls` is exactly the host's live balls.
    fn step(&mut self, balls: &mut [Ball], dt: f32);

    /// Redraw the whole canvas. Must not touch simulation state.
    fn render(&mut self, canvas: &mut Canvas<'_>);

    /// Snapshot persistent state
    fn save(&self) -> Vec<u8> {
        Vec::new()
    }

    /// Restore a snapshot written by `save`. On error nothing changes.
    fn load(&mut self, blob: &[u8]) -> Result<(), PersistError> {
        if blob.is_empty() {
            Ok(())
        } else {
            Err(PersistError::Truncated {
                expected: 0,
                found: blob.len(),
            })
        }
    }
}

/// Available chambers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChamberKind {
    Simple,
    #[default]
    Guard,
    Portals,
}

impl ChamberKind {
    pub const ALL: [ChamberKind; 3] = [ChamberKind::Simple, ChamberKind::Guard, ChamberKind::Portals];

    /// Numeric id used across the WASM boundary. Id 0 is the default chamber
    /// so a host that never passes an id gets the guard.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(ChamberKind::Guard),
            1 => Some(ChamberKind::Simple),
            2 => Some(ChamberKind::Portals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChamberKind::Simple => "simple",
            ChamberKind::Guard => "guard",
            ChamberKind::Portals => "portals",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(ChamberKind::Simple),
            "guard" => Some(ChamberKind::Guard),
            "portals" | "portal" => Some(ChamberKind::Portals),
            _ => None,
        }
    }

    pub fn build(self, tuning: &Tuning) -> Box<dyn Chamber> {
        match self {
            ChamberKind::Simple => Box::new(SimpleChamber::new(tuning)),
            ChamberKind::Guard => Box::new(GuardChamber::new(tuning)),
            ChamberKind::Portals => Box::new(PortalsChamber::new(tuning)),
        }
    }
}
