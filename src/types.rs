//! Core types and constants for the solar rotation model.

use bevy::prelude::*;

/// Rotation periods (days)

/// Sidereal rotation period of the Sun: one rotation measured against the
/// fixed background stars.
pub const SIDEREAL_PERIOD_DAYS: f64 = 25.38;

/// Synodic rotation period of the Sun: one rotation as observed from the
/// orbiting Earth. Longer than sidereal because Earth's orbital motion adds
/// apparent lag.
pub const SYNODIC_PERIOD_DAYS: f64 = 26.24;

/// Degrees the Sun rotates per simulated day.
pub const SUN_DEG_PER_DAY: f64 = 360.0 / SIDEREAL_PERIOD_DAYS;

/// Implied orbital rate for Earth (degrees per simulated day).
///
/// This is the orbital rate that, combined with the sidereal spin, reproduces
/// the synodic period exactly.
pub const EARTH_DEG_PER_DAY: f64 =
    360.0 * (1.0 / SIDEREAL_PERIOD_DAYS - 1.0 / SYNODIC_PERIOD_DAYS);

/// Simulated days added per display frame at speed 1.0.
///
/// Fixed tuning constant, not derived from wall-clock delta: perceived speed
/// follows the display refresh rate.
pub const DAYS_PER_FRAME: f64 = 0.05;

/// Speed multiplier bounds enforced by `SolarClock::set_speed`.
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;

/// Reference frame for the rotation animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Rotation measured against the fixed stars.
    #[default]
    Sidereal,
    /// Rotation measured against the orbiting Earth.
    Synodic,
}

impl RotationMode {
    /// Display label for mode buttons.
    pub fn label(&self) -> &'static str {
        match self {
            RotationMode::Sidereal => "Sidereal",
            RotationMode::Synodic => "Synodic",
        }
    }

    /// One-line explanation shown next to the mode buttons.
    pub fn caption(&self) -> &'static str {
        match self {
            RotationMode::Sidereal => {
                "Sidereal period (25.38 days): rotation vs distant stars."
            }
            RotationMode::Synodic => {
                "Synodic period (26.24 days): rotation vs moving Earth."
            }
        }
    }
}

/// Simulation clock resource for the rotation animation.
///
/// Advanced once per display frame by `time::advance_clock` while playing;
/// mutated otherwise only through the control methods below. The two display
/// angles are derived from this state every frame and never stored.
#[derive(Resource, Clone, Debug)]
pub struct SolarClock {
    /// Elapsed simulated time in days. Non-negative, monotonically
    /// non-decreasing while playing.
    pub elapsed_days: f64,
    /// Whether the animation is advancing.
    pub playing: bool,
    /// Speed multiplier, kept within [`MIN_SPEED`, `MAX_SPEED`].
    pub speed: f64,
    /// Current reference frame.
    pub mode: RotationMode,
}

impl Default for SolarClock {
    fn default() -> Self {
        Self {
            elapsed_days: 0.0,
            playing: true,
            speed: 1.0,
            mode: RotationMode::Sidereal,
        }
    }
}

impl SolarClock {
    /// Flip between playing and paused.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Switch the reference frame. Elapsed time is preserved.
    pub fn set_mode(&mut self, mode: RotationMode) {
        self.mode = mode;
    }

    /// Set the speed multiplier, clamped to [`MIN_SPEED`, `MAX_SPEED`].
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Rewind to the start and pause.
    pub fn reset(&mut self) {
        self.elapsed_days = 0.0;
        self.playing = false;
    }

    /// Advance by one display frame worth of simulated time.
    pub fn step_frame(&mut self) {
        self.elapsed_days += DAYS_PER_FRAME * self.speed;
    }

    /// Current rotation angle of the Sun in degrees, in [0, 360).
    pub fn sun_rotation_deg(&self) -> f64 {
        wrap_degrees(self.elapsed_days * SUN_DEG_PER_DAY)
    }

    /// Current orbital angle of the Earth marker in degrees, in [0, 360).
    ///
    /// Zero in sidereal mode: the observer there is the fixed stars, not Earth.
    pub fn earth_orbit_deg(&self) -> f64 {
        match self.mode {
            RotationMode::Sidereal => 0.0,
            RotationMode::Synodic => wrap_degrees(self.elapsed_days * EARTH_DEG_PER_DAY),
        }
    }
}

/// Wrap an angle into [0, 360) with a non-negative result for negative input.
pub fn wrap_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_degrees_range() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_relative_eq!(wrap_degrees(365.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_degrees(-10.0), 350.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rates_consistent_with_periods() {
        // One sidereal period covers exactly one full turn.
        assert_relative_eq!(SUN_DEG_PER_DAY * SIDEREAL_PERIOD_DAYS, 360.0, epsilon = 1e-9);
        // Over one synodic period the Sun laps the Earth marker by one turn.
        let relative = (SUN_DEG_PER_DAY - EARTH_DEG_PER_DAY) * SYNODIC_PERIOD_DAYS;
        assert_relative_eq!(relative, 360.0, epsilon = 1e-9);
    }

    #[test]
    fn test_default_clock() {
        let clock = SolarClock::default();
        assert_eq!(clock.elapsed_days, 0.0);
        assert!(clock.playing);
        assert_eq!(clock.speed, 1.0);
        assert_eq!(clock.mode, RotationMode::Sidereal);
    }

    #[test]
    fn test_step_frame_scales_with_speed() {
        let mut clock = SolarClock::default();
        clock.step_frame();
        assert_eq!(clock.elapsed_days, 0.05);

        let mut fast = SolarClock {
            speed: 2.0,
            ..SolarClock::default()
        };
        fast.step_frame();
        assert_eq!(fast.elapsed_days, 0.10);
    }

    #[test]
    fn test_set_speed_clamps() {
        let mut clock = SolarClock::default();
        clock.set_speed(0.0);
        assert_eq!(clock.speed, MIN_SPEED);
        clock.set_speed(99.0);
        assert_eq!(clock.speed, MAX_SPEED);
        clock.set_speed(2.5);
        assert_eq!(clock.speed, 2.5);
    }

    #[test]
    fn test_reset_pauses_and_zeroes() {
        let mut clock = SolarClock::default();
        clock.elapsed_days = 42.0;
        clock.reset();
        assert_eq!(clock.elapsed_days, 0.0);
        assert!(!clock.playing);
    }

    #[test]
    fn test_earth_angle_zero_in_sidereal() {
        let clock = SolarClock {
            elapsed_days: 123.456,
            ..SolarClock::default()
        };
        assert_eq!(clock.earth_orbit_deg(), 0.0);
    }

    #[test]
    fn test_angles_zero_at_start() {
        for mode in [RotationMode::Sidereal, RotationMode::Synodic] {
            let clock = SolarClock {
                mode,
                ..SolarClock::default()
            };
            assert_eq!(clock.sun_rotation_deg(), 0.0);
            assert_eq!(clock.earth_orbit_deg(), 0.0);
        }
    }
}
