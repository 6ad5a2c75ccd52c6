//! Helioscope - Interactive Anatomy of the Sun
//!
//! A desktop application presenting an animated cross-section of the Sun
//! with a dual-mode rotation simulation and educational panels.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use helioscope::camera::CameraPlugin;
use helioscope::input::InputPlugin;
use helioscope::render::RenderPlugin;
use helioscope::time::TimePlugin;
use helioscope::types::SolarClock;
use helioscope::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Helioscope".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(SolarClock::default())
        // Add simulation plugins
        .add_plugins((CameraPlugin, TimePlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run();
}
