//! Time advancement system for the rotation animation.
//!
//! Advances the clock by a fixed increment per display frame while playing.

use bevy::prelude::*;

use crate::types::SolarClock;

/// Plugin providing clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_clock);
    }
}

/// Advance the solar clock by one frame step while playing.
///
/// The increment is `DAYS_PER_FRAME * speed` per tick of the `Update`
/// schedule, not scaled by wall-clock delta: simulated speed is tied to the
/// display refresh rate.
fn advance_clock(mut clock: ResMut<SolarClock>) {
    if !clock.playing {
        return;
    }

    clock.step_frame();
}
