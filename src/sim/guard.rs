//! Guard motion controller
//!
//! The guard cools down after every interception, then searches for a ball to
//! intercept. Once locked it eases from where it stood to the predicted
//! interception point over exactly the predicted time. With nothing to chase
//! it drifts back to its rest point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Ball;
use super::target::{Lock, search_target};
use crate::tuning::{GuardTuning, PhysicsTuning};

/// Controller state, derived from the guard's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardPhase {
    /// Waiting for the cooldown to elapse before searching again
    Cooldown,
    /// No target; searching every step and drifting to the rest point
    Idle,
    /// Interpolating toward a locked interception point
    Targeting,
}

/// A locked interception point and its timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub predicted_pos: Vec2,
    /// Seconds spent moving toward this target
    pub time_acc: f32,
    /// Seconds the ball needs to reach `predicted_pos`
    pub time_to_target: f32,
}

impl Target {
    /// Interpolation fraction in [0, 1]; a zero-length window is already done
    #[inline]
    pub fn fraction(&self) -> f32 {
        if self.time_to_target <= 0.0 {
            return 1.0;
        }
        (self.time_acc / self.time_to_target).clamp(0.0, 1.0)
    }
}

/// The interceptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guard {
    pub pos: Vec2,
    /// Interpolation origin of the current (or last) move
    pub start_pos: Vec2,
    pub radius: f32,
    /// Seconds since the last target was acquired or cleared
    pub cooldown_time: f32,
    pub target: Option<Target>,
}

impl Guard {
    pub fn new(tuning: &GuardTuning) -> Self {
        Self {
            pos: tuning.start,
            start_pos: tuning.start,
            radius: tuning.radius,
            cooldown_time: 0.0,
            target: None,
        }
    }

    #[inline]
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    pub fn phase(&self, tuning: &GuardTuning) -> GuardPhase {
        if self.has_target() {
            GuardPhase::Targeting
        } else if self.cooldown_time < tuning.cooldown_threshold {
            GuardPhase::Cooldown
        } else {
            GuardPhase::Idle
        }
    }

    /// Start moving toward a lock. The interception point is pushed ahead of
    /// the ball along its predicted velocity so the guard meets it head on.
    pub fn lock_on(&mut self, lock: &Lock, ball: &Ball, tuning: &GuardTuning) {
        let lead = ball.radius + self.radius - tuning.lead_epsilon;
        let predicted_pos = lead_point(lock.prediction.pos, lock.prediction.velocity, lead);

        log::debug!(
            "guard locked on ball {} at ({:.3}, {:.3}) in {:.2}s",
            lock.ball,
            predicted_pos.x,
            predicted_pos.y,
            lock.time_to_target
        );

        self.start_pos = self.pos;
        self.target = Some(Target {
            predicted_pos,
            time_acc: 0.0,
            time_to_target: lock.time_to_target,
        });
    }

    /// Drop any target and restart the cooldown
    pub fn release(&mut self) {
        if self.target.take().is_some() {
            log::debug!("guard released target at ({:.3}, {:.3})", self.pos.x, self.pos.y);
        }
        self.cooldown_time = 0.0;
        self.start_pos = self.pos;
    }

    /// One controller step: cooldown, acquisition, then motion
    pub fn update(&mut self, balls: &[Ball], dt: f32, tuning: &GuardTuning, physics: &PhysicsTuning) {
        self.cooldown_time += dt;

        if !self.has_target() && self.cooldown_time >= tuning.cooldown_threshold {
            if let Some(lock) = search_target(balls, self, tuning, physics) {
                if let Some(ball) = balls.get(lock.ball) {
                    self.lock_on(&lock, ball, tuning);
                }
            }
        }

        if let Some(target) = self.target.as_mut() {
            let t = target.fraction();
            self.pos = self
                .start_pos
                .lerp(target.predicted_pos, tuning.easing.apply(t));
            target.time_acc += dt;

            if t >= 1.0 {
                self.release();
            }
        } else if self.cooldown_time >= tuning.cooldown_threshold {
            self.drift_to_rest(dt, tuning);
        }
    }

    /// Move toward the rest point at constant speed without overshooting
    fn drift_to_rest(&mut self, dt: f32, tuning: &GuardTuning) {
        let to_rest = tuning.rest_point - self.pos;
        let distance = to_rest.length();
        if distance < tuning.snap_epsilon {
            self.pos = tuning.rest_point;
            return;
        }
        if let Some(dir) = to_rest.try_normalize() {
            let step = (tuning.centering_speed * dt).min(distance);
            self.pos += dir * step;
        }
    }
}

/// Offset `pos` by `lead` along `velocity`; no direction means no offset
#[inline]
pub fn lead_point(pos: Vec2, velocity: Vec2, lead: f32) -> Vec2 {
    match velocity.try_normalize() {
        Some(dir) => pos + dir * lead,
        None => pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::predict::PredictionResult;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn lock_at(pos: Vec2, time_to_target: f32) -> Lock {
        Lock {
            ball: 0,
            prediction: PredictionResult {
                pos,
                velocity: Vec2::ZERO,
            },
            time_to_target,
        }
    }

    #[test]
    fn test_phases() {
        let tuning = GuardTuning::default();
        let mut guard = Guard::new(&tuning);
        assert_eq!(guard.phase(&tuning), GuardPhase::Cooldown);

        guard.cooldown_time = tuning.cooldown_threshold;
        assert_eq!(guard.phase(&tuning), GuardPhase::Idle);

        let ball = Ball::new(Vec2::new(0.4, 0.4), 0.02, Vec2::ZERO);
        guard.lock_on(&lock_at(Vec2::new(0.4, 0.4), 0.2), &ball, &tuning);
        assert_eq!(guard.phase(&tuning), GuardPhase::Targeting);

        guard.release();
        assert_eq!(guard.phase(&tuning), GuardPhase::Cooldown);
        assert_eq!(guard.start_pos, guard.pos);
    }

    #[test]
    fn test_lead_point() {
        let p = lead_point(Vec2::new(0.5, 0.5), Vec2::new(0.0, -3.0), 0.1);
        assert!((p.y - 0.4).abs() < 1e-6);
        assert_eq!(lead_point(Vec2::new(0.5, 0.5), Vec2::ZERO, 0.1), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_lock_on_leads_the_ball() {
        let tuning = GuardTuning::default();
        let mut guard = Guard::new(&tuning);
        let ball = Ball::new(Vec2::new(0.5, 0.7), 0.02, Vec2::new(0.0, -1.0));
        let lock = Lock {
            ball: 0,
            prediction: PredictionResult {
                pos: Vec2::new(0.5, 0.6),
                velocity: Vec2::new(0.0, -2.0),
            },
            time_to_target: 0.2,
        };
        guard.lock_on(&lock, &ball, &tuning);
        let target = guard.target.expect("target");
        let lead = 0.02 + tuning.radius - tuning.lead_epsilon;
        assert!((target.predicted_pos.y - (0.6 - lead)).abs() < 1e-6);
        assert_eq!(target.time_acc, 0.0);
        assert_eq!(target.time_to_target, 0.2);
        assert_eq!(guard.start_pos, tuning.start);
    }

    #[test]
    fn test_zero_time_to_target_completes_immediately() {
        let tuning = GuardTuning::default();
        let mut guard = Guard::new(&tuning);
        let ball = Ball::default();
        guard.lock_on(&lock_at(Vec2::new(0.3, 0.3), 0.0), &ball, &tuning);
        assert_eq!(guard.target.map(|t| t.fraction()), Some(1.0));

        guard.update(&[], DT, &tuning, &PhysicsTuning::default());
        assert!(!guard.has_target());
        assert!((guard.pos - Vec2::new(0.3, 0.3)).length() < 1e-6);
        assert_eq!(guard.cooldown_time, 0.0);
    }

    #[test]
    fn test_targeting_reaches_target_then_cools_down() {
        let tuning = GuardTuning::default();
        let physics = PhysicsTuning::default();
        let mut guard = Guard::new(&tuning);
        let ball = Ball::default();
        let goal = Vec2::new(0.3, 0.4);
        guard.lock_on(&lock_at(goal, 0.1), &ball, &tuning);

        let mut last_t = 0.0;
        let mut steps = 0;
        while let Some(target) = guard.target {
            let t = target.fraction();
            assert!(t >= last_t);
            last_t = t;
            guard.update(&[], DT, &tuning, &physics);
            steps += 1;
            assert!(steps < 100);
        }
        assert!((guard.pos - goal).length() < 1e-5);
        assert_eq!(guard.cooldown_time, 0.0);
    }

    #[test]
    fn test_quad_ease_is_slow_at_first() {
        let tuning = GuardTuning::default();
        let mut guard = Guard::new(&tuning);
        let ball = Ball::default();
        guard.lock_on(&lock_at(Vec2::new(0.5, 0.1), 1.0), &ball, &tuning);
        let target = guard.target.as_mut().expect("target");
        target.time_acc = 0.5;

        guard.update(&[], DT, &tuning, &PhysicsTuning::default());
        // Quarter of the way at half time
        assert!((guard.pos.y - (0.5 - 0.4 * 0.25)).abs() < 1e-5);
    }

    #[test]
    fn test_idle_guard_drifts_to_rest_and_stops() {
        let tuning = GuardTuning::default();
        let physics = PhysicsTuning::default();
        let mut guard = Guard::new(&tuning);
        // Nothing approaching
        let balls = [Ball::new(Vec2::new(0.9, 0.1), 0.02, Vec2::new(1.0, -1.0))];

        for _ in 0..120 {
            guard.update(&balls, DT, &tuning, &physics);
        }
        assert!(!guard.has_target());
        assert!((guard.pos - tuning.rest_point).length() <= tuning.snap_epsilon);

        for _ in 0..10 {
            guard.update(&balls, DT, &tuning, &physics);
            assert_eq!(guard.pos, tuning.rest_point);
        }
    }

    #[test]
    fn test_no_drift_during_cooldown() {
        let tuning = GuardTuning::default();
        let mut guard = Guard::new(&tuning);
        guard.update(&[], 0.01, &tuning, &PhysicsTuning::default());
        assert_eq!(guard.pos, tuning.start);
    }

    #[test]
    fn test_acquires_falling_ball_after_cooldown() {
        let tuning = GuardTuning::default();
        let physics = PhysicsTuning::default();
        let mut guard = Guard::new(&tuning);
        let balls = [Ball::new(Vec2::new(0.55, 0.66), 0.02, Vec2::new(0.0, -0.2))];

        guard.update(&balls, 0.05, &tuning, &physics);
        assert!(!guard.has_target());

        guard.update(&balls, 0.06, &tuning, &physics);
        assert!(guard.has_target());
        assert_eq!(guard.phase(&tuning), GuardPhase::Targeting);
    }

    proptest! {
        #[test]
        fn prop_fraction_monotonic_and_exact(
            ttt in 0.01f32..1.0,
            steps in proptest::collection::vec(0.0f32..0.05, 1..40),
        ) {
            let mut target = Target { predicted_pos: Vec2::ZERO, time_acc: 0.0, time_to_target: ttt };
            let mut last = target.fraction();
            for dt in steps {
                target.time_acc += dt;
                let t = target.fraction();
                prop_assert!(t >= last);
                prop_assert!((0.0..=1.0).contains(&t));
                last = t;
            }
            target.time_acc = ttt;
            prop_assert_eq!(target.fraction(), 1.0);
        }
    }
}
