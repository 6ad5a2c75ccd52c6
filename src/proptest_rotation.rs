//! Property-based tests for the rotation model using proptest.
//!
//! These tests verify angle and control invariants across wide parameter
//! ranges.

use proptest::prelude::*;

use crate::test_utils::fixtures;
use crate::types::{
    wrap_degrees, RotationMode, SolarClock, MAX_SPEED, MIN_SPEED,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The Sun rotation angle stays in [0, 360) for any non-negative time.
    #[test]
    fn prop_sun_angle_in_range(elapsed_days in 0.0f64..1.0e6) {
        let clock = fixtures::clock_at(elapsed_days);
        let angle = clock.sun_rotation_deg();
        prop_assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
    }

    /// The Earth orbit angle stays in [0, 360) in synodic mode.
    #[test]
    fn prop_earth_angle_in_range_synodic(elapsed_days in 0.0f64..1.0e6) {
        let clock = fixtures::synodic_clock_at(elapsed_days);
        let angle = clock.earth_orbit_deg();
        prop_assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
    }

    /// The Earth orbit angle is exactly zero in sidereal mode.
    #[test]
    fn prop_earth_angle_zero_sidereal(elapsed_days in 0.0f64..1.0e6) {
        let clock = fixtures::clock_at(elapsed_days);
        prop_assert_eq!(clock.earth_orbit_deg(), 0.0);
    }

    /// Wrapping produces a non-negative result even for negative input.
    #[test]
    fn prop_wrap_degrees_non_negative(deg in -1.0e7f64..1.0e7) {
        let wrapped = wrap_degrees(deg);
        prop_assert!((0.0..360.0).contains(&wrapped), "wrapped {wrapped} out of range");
    }

    /// Speed setting always lands inside the control bounds.
    #[test]
    fn prop_set_speed_clamps(speed in -100.0f64..100.0) {
        let mut clock = SolarClock::default();
        clock.set_speed(speed);
        prop_assert!((MIN_SPEED..=MAX_SPEED).contains(&clock.speed));
    }

    /// Switching modes never touches elapsed time.
    #[test]
    fn prop_mode_switch_preserves_elapsed(elapsed_days in 0.0f64..1.0e6) {
        let mut clock = fixtures::clock_at(elapsed_days);
        clock.set_mode(RotationMode::Synodic);
        prop_assert_eq!(clock.elapsed_days, elapsed_days);
        clock.set_mode(RotationMode::Sidereal);
        prop_assert_eq!(clock.elapsed_days, elapsed_days);
    }

    /// Elapsed time is strictly increasing while playing.
    #[test]
    fn prop_elapsed_monotonic_while_playing(
        speed in MIN_SPEED..MAX_SPEED,
        frames in 1usize..200,
    ) {
        let mut clock = SolarClock {
            playing: true,
            speed,
            ..SolarClock::default()
        };

        let mut previous = clock.elapsed_days;
        for _ in 0..frames {
            clock.step_frame();
            prop_assert!(clock.elapsed_days > previous);
            previous = clock.elapsed_days;
        }
    }
}
