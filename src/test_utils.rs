//! Test utilities for the rotation model.
//!
//! Provides fixtures for creating clocks in known states and a headless app
//! helper for schedule-level tests.

/// Fixtures for creating clocks in known states.
pub mod fixtures {
    use crate::types::{RotationMode, SolarClock};

    /// A paused clock at the given elapsed time, sidereal mode.
    pub fn clock_at(elapsed_days: f64) -> SolarClock {
        SolarClock {
            elapsed_days,
            playing: false,
            speed: 1.0,
            mode: RotationMode::Sidereal,
        }
    }

    /// A paused clock at the given elapsed time, synodic mode.
    pub fn synodic_clock_at(elapsed_days: f64) -> SolarClock {
        SolarClock {
            mode: RotationMode::Synodic,
            ..clock_at(elapsed_days)
        }
    }

    /// Advance a clock the way the per-frame system does: step only while
    /// playing.
    pub fn advance_frames(clock: &mut SolarClock, frames: usize) {
        for _ in 0..frames {
            if clock.playing {
                clock.step_frame();
            }
        }
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RotationMode;

    #[test]
    fn test_fixture_clocks_are_paused() {
        assert!(!fixtures::clock_at(5.0).playing);
        assert!(!fixtures::synodic_clock_at(5.0).playing);
        assert_eq!(fixtures::synodic_clock_at(5.0).mode, RotationMode::Synodic);
    }

    #[test]
    fn test_advance_frames_respects_pause() {
        let mut clock = fixtures::clock_at(1.0);
        fixtures::advance_frames(&mut clock, 10);
        assert_eq!(clock.elapsed_days, 1.0);

        clock.playing = true;
        fixtures::advance_frames(&mut clock, 10);
        assert_eq!(clock.elapsed_days, 1.5);
    }
}
