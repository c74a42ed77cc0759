//! Easing curves for guard and portal motion

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing function applied to a normalized time `t` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant velocity
    Linear,
    /// Slow start (`t²`)
    #[default]
    QuadIn,
    /// Very slow start (`t⁴`)
    QuartIn,
    /// Slow start and end, cubic
    CubicInOut,
    /// Slow start and end, sine
    SineInOut,
}

impl Easing {
    /// Input is clamped to [0, 1]; every curve maps 0 → 0 and 1 → 1
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuartIn => t * t * t * t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = 2.0 * t - 2.0;
                    0.5 * f * f * f + 1.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
