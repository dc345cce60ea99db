//! Motion controller: target-seeking steering with distance-based slowdown
//! and terrain speed capping.
//!
//! Runs after the physics step. Each tick it points the vehicle's velocity at
//! the target with magnitude equal to the current acceleration scalar, then
//! updates that scalar for the next tick:
//!
//! * **Near target** (`distance < target_threshold`): scale by
//!   `distance / target_threshold`, snapping to zero below `stop_threshold`.
//! * **Far from target**: drift toward the active cap, at most
//!   `max_decel_step` down or `max_accel_step` up per tick.
//!
//! The velocity written here is integrated by the *next* physics step, so
//! there is always a one-tick lag between steering and motion.

use bevy::prelude::*;

use crate::game_params::DriveParams;
use crate::physics::LinearVelocity;
use crate::pointer::TargetPoint;
use crate::scene::SceneHandles;

/// Marker for the player's vehicle.
#[derive(Component, Debug, Default)]
pub struct Vehicle;

/// Controller state that persists across ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DriveState {
    /// Current speed scalar. Never negative. Climbs toward the cap in force
    /// and, after the cap drops, steps down toward it by at most
    /// `max_decel_step` per tick.
    pub acceleration: f32,
    /// Active cap, recomputed from terrain every tick.
    pub max_speed: f32,
}

impl DriveState {
    pub fn new(max_speed: f32) -> Self {
        Self {
            acceleration: 0.0,
            max_speed,
        }
    }
}

/// Result of one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// New velocity, or `None` when the vehicle sits exactly on the target.
    pub velocity: Option<Vec2>,
    /// New heading in radians, or `None` to keep the current one.
    pub heading: Option<f32>,
    /// Acceleration to carry into the next tick.
    pub acceleration: f32,
}

/// Acceleration for the next tick.
pub fn next_acceleration(acceleration: f32, distance: f32, cap: f32, params: &DriveParams) -> f32 {
    let threshold = params.target_threshold;
    if distance < threshold {
        let delta = threshold - distance;
        let scaled = acceleration * ((threshold - delta) / threshold);
        if scaled < params.stop_threshold {
            0.0
        } else {
            scaled
        }
    } else {
        let mut next = acceleration;
        if next > cap {
            next -= (next - cap).min(params.max_decel_step);
        }
        if next < cap {
            next += (cap - next).min(params.max_accel_step);
        }
        next
    }
}

/// One steering step from the vehicle's position toward the target.
///
/// At zero distance the direction is undefined, so no velocity or heading is
/// produced; the acceleration update still runs (and decays to zero).
pub fn steer(
    target: Vec2,
    position: Vec2,
    drive: DriveState,
    params: &DriveParams,
) -> Steering {
    let offset = target - position;
    let distance = offset.length();

    let velocity = if distance > 0.0 {
        Some(offset / distance * drive.acceleration)
    } else {
        None
    };

    let heading = velocity
        .filter(|_| drive.acceleration > params.heading_threshold)
        .map(|v| v.y.atan2(v.x));

    Steering {
        velocity,
        heading,
        acceleration: next_acceleration(drive.acceleration, distance, drive.max_speed, params),
    }
}

pub fn steer_vehicle(
    handles: Res<SceneHandles>,
    params: Res<DriveParams>,
    target: Res<TargetPoint>,
    mut vehicles: Query<(&mut Transform, &mut LinearVelocity, &mut DriveState)>,
) {
    let Ok((mut transform, mut velocity, mut drive)) = vehicles.get_mut(handles.vehicle) else {
        return;
    };

    let steering = steer(target.0, transform.translation.truncate(), *drive, &params);

    if let Some(v) = steering.velocity {
        velocity.0 = v;
    }
    if let Some(heading) = steering.heading {
        transform.rotation = Quat::from_rotation_z(heading);
    }
    drive.acceleration = steering.acceleration;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DriveParams {
        DriveParams::default()
    }

    // ------------------------------------------------------------------
    // Near-target regime
    // ------------------------------------------------------------------

    #[test]
    fn test_near_target_scales_by_distance_ratio() {
        assert_eq!(next_acceleration(100.0, 100.0, 4000.0, &params()), 50.0);
    }

    #[test]
    fn test_near_target_snaps_small_values_to_zero() {
        // 3 * (20 / 200) = 0.3 < 2
        assert_eq!(next_acceleration(3.0, 20.0, 4000.0, &params()), 0.0);
        // 10 * (50 / 200) = 2.5 stays
        assert_eq!(next_acceleration(10.0, 50.0, 4000.0, &params()), 2.5);
    }

    #[test]
    fn test_near_target_ignores_cap() {
        // Even far below the cap, being inside the threshold only slows down.
        let next = next_acceleration(1000.0, 150.0, 4000.0, &params());
        assert_eq!(next, 750.0);
    }

    #[test]
    fn test_at_target_decays_to_zero() {
        assert_eq!(next_acceleration(3000.0, 0.0, 4000.0, &params()), 0.0);
    }

    // ------------------------------------------------------------------
    // Far-from-target regime
    // ------------------------------------------------------------------

    #[test]
    fn test_far_accelerates_in_steps_of_40_without_overshoot() {
        let p = params();
        let mut acc = 0.0;
        for step in 1..=5 {
            acc = next_acceleration(acc, 1000.0, 190.0, &p);
            let expected = (40.0 * step as f32).min(190.0);
            assert_eq!(acc, expected, "step {step}");
        }
        assert_eq!(acc, 190.0);
        assert_eq!(next_acceleration(acc, 1000.0, 190.0, &p), 190.0);
    }

    #[test]
    fn test_far_decelerates_in_steps_of_80_without_undershoot() {
        let p = params();
        let mut acc = 500.0;
        let mut seen = vec![acc];
        while acc != 200.0 {
            let prev = acc;
            acc = next_acceleration(acc, 1000.0, 200.0, &p);
            assert!(acc < prev, "must strictly decrease");
            assert_eq!(prev - acc, (prev - 200.0).min(80.0));
            seen.push(acc);
        }
        assert_eq!(seen, vec![500.0, 420.0, 340.0, 260.0, 200.0]);
    }

    #[test]
    fn test_far_at_cap_holds() {
        assert_eq!(next_acceleration(200.0, 250.0, 200.0, &params()), 200.0);
    }

    #[test]
    fn test_threshold_boundary_is_far_regime() {
        // distance == threshold counts as far
        assert_eq!(next_acceleration(0.0, 200.0, 4000.0, &params()), 40.0);
    }

    #[test]
    fn test_land_ramp_then_water_slowdown() {
        let p = params();
        let mut acc = 0.0;
        let mut ticks = 0;
        while acc < p.land_max_speed {
            let prev = acc;
            acc = next_acceleration(acc, 1000.0, p.land_max_speed, &p);
            assert_eq!(acc - prev, 40.0);
            ticks += 1;
        }
        assert_eq!(ticks, 100);
        assert_eq!(acc, 4000.0);
        assert_eq!(next_acceleration(acc, 1000.0, p.land_max_speed, &p), 4000.0);

        // Cross into water: cap drops to 200.
        let mut decel_ticks = 0;
        while acc > p.water_max_speed {
            let prev = acc;
            acc = next_acceleration(acc, 1000.0, p.water_max_speed, &p);
            assert!(prev - acc <= 80.0);
            decel_ticks += 1;
        }
        assert_eq!(acc, 200.0);
        assert_eq!(decel_ticks, 48); // 3800 / 80 = 47.5
    }

    // ------------------------------------------------------------------
    // Steering
    // ------------------------------------------------------------------

    #[test]
    fn test_velocity_points_at_target_with_acceleration_magnitude() {
        let drive = DriveState {
            acceleration: 300.0,
            max_speed: 4000.0,
        };
        let s = steer(Vec2::new(0.0, 1000.0), Vec2::ZERO, drive, &params());
        let v = s.velocity.expect("non-zero distance");
        assert!((v - Vec2::new(0.0, 300.0)).length() < 1e-3);
        assert_eq!(s.acceleration, 340.0);
    }

    #[test]
    fn test_heading_follows_velocity_above_threshold() {
        let drive = DriveState {
            acceleration: 10.0,
            max_speed: 4000.0,
        };
        let s = steer(Vec2::new(-500.0, 0.0), Vec2::ZERO, drive, &params());
        let heading = s.heading.expect("acceleration above 5");
        assert!((heading.abs() - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_heading_unchanged_when_nearly_stationary() {
        let drive = DriveState {
            acceleration: 5.0,
            max_speed: 4000.0,
        };
        let s = steer(Vec2::new(500.0, 0.0), Vec2::ZERO, drive, &params());
        assert!(s.velocity.is_some());
        assert_eq!(s.heading, None);
    }

    #[test]
    fn test_zero_distance_produces_no_velocity_and_no_nan() {
        let drive = DriveState {
            acceleration: 120.0,
            max_speed: 4000.0,
        };
        let p = Vec2::new(12.0, -7.0);
        let s = steer(p, p, drive, &params());
        assert_eq!(s.velocity, None);
        assert_eq!(s.heading, None);
        assert_eq!(s.acceleration, 0.0);
        assert!(s.acceleration.is_finite());
    }

    #[test]
    fn test_zero_acceleration_gives_zero_velocity() {
        let s = steer(
            Vec2::new(1000.0, 0.0),
            Vec2::ZERO,
            DriveState::new(4000.0),
            &params(),
        );
        assert_eq!(s.velocity, Some(Vec2::ZERO));
        assert_eq!(s.heading, None);
    }
}
