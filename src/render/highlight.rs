//! Hover detection and highlighting for the shell diagram.
//!
//! Provides visual feedback when the mouse hovers over a shell; the tooltip
//! UI reads the same resource.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::MainCamera;
use crate::layers::{self, SunLayerId};
use crate::render::{z_layers, SUN_SCALE};

/// Plugin providing hover detection and highlighting.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredLayer>()
            .add_systems(Update, (detect_hover, draw_highlight).chain());
    }
}

/// Resource tracking the currently hovered shell.
#[derive(Resource, Default)]
pub struct HoveredLayer {
    /// Id of the hovered shell, if any.
    pub layer: Option<SunLayerId>,
}

/// Detect which shell the mouse is hovering over.
fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut hovered: ResMut<HoveredLayer>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        hovered.layer = None;
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    // Convert cursor position to world coordinates
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        hovered.layer = None;
        return;
    };

    // The Sun is centered at the origin; hit the innermost shell whose
    // scaled radius contains the cursor distance.
    let distance = world_pos.length() / SUN_SCALE;
    hovered.layer = layers::layer_at(distance).map(|l| l.id);
}

/// Draw a highlight ring at the hovered shell's radius.
fn draw_highlight(hovered: Res<HoveredLayer>, mut gizmos: Gizmos) {
    let Some(id) = hovered.layer else {
        return;
    };

    let ring_radius = layers::get(id).radius * SUN_SCALE;
    let color = Color::WHITE;

    // Draw circle using line segments
    let segments = 48;
    for i in 0..segments {
        let t0 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let t1 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        let p0 = Vec3::new(
            ring_radius * t0.cos(),
            ring_radius * t0.sin(),
            z_layers::OVERLAY,
        );
        let p1 = Vec3::new(
            ring_radius * t1.cos(),
            ring_radius * t1.sin(),
            z_layers::OVERLAY,
        );

        gizmos.line(p0, p1, color);
    }
}
