//! Keyboard shortcuts for the rotation controls.

use bevy::prelude::*;

use crate::types::{RotationMode, SolarClock};

/// Speed change per arrow-key press.
const SPEED_STEP: f64 = 0.1;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts for the simulation clock.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut clock: ResMut<SolarClock>) {
    // Space: toggle play/pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_play();
        info!("Rotation {}", if clock.playing { "playing" } else { "paused" });
    }

    // R: rewind to day zero
    if keys.just_pressed(KeyCode::KeyR) {
        clock.reset();
        info!("Rotation reset");
    }

    // Mode selection with number keys
    if keys.just_pressed(KeyCode::Digit1) {
        clock.set_mode(RotationMode::Sidereal);
        info!("Mode: sidereal");
    }
    if keys.just_pressed(KeyCode::Digit2) {
        clock.set_mode(RotationMode::Synodic);
        info!("Mode: synodic");
    }

    // Arrow up/down: adjust speed in small steps
    if keys.just_pressed(KeyCode::ArrowUp) {
        let speed = clock.speed + SPEED_STEP;
        clock.set_speed(speed);
        info!("Speed: {:.1}x", clock.speed);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        let speed = clock.speed - SPEED_STEP;
        clock.set_speed(speed);
        info!("Speed: {:.1}x", clock.speed);
    }
}
