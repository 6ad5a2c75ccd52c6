//! Common test utilities for integration tests.

use helioscope::types::{RotationMode, SolarClock};

/// A playing clock with the given speed and mode, at day zero.
pub fn playing_clock(speed: f64, mode: RotationMode) -> SolarClock {
    SolarClock {
        elapsed_days: 0.0,
        playing: true,
        speed,
        mode,
    }
}

/// A paused clock at a given elapsed time.
pub fn paused_clock_at(elapsed_days: f64, mode: RotationMode) -> SolarClock {
    SolarClock {
        elapsed_days,
        playing: false,
        speed: 1.0,
        mode,
    }
}

/// Shortest angular distance from `angle` to zero, on the [0, 360) circle.
pub fn wrap_distance_to_zero(angle: f64) -> f64 {
    angle.min(360.0 - angle)
}
