//! Fixed orthographic camera for the diagram view.

use bevy::{prelude::*, render::camera::ScalingMode};

/// Viewport height in world units. Sized so the Earth orbit overlay
/// (radius 85) fits with margin.
pub const VIEWPORT_HEIGHT: f32 = 220.0;

/// Horizontal offset of the view center. The explanatory panels overlay the
/// right side of the window, so the camera looks at a point right of the Sun
/// to keep the diagram centered in the remaining space.
pub const VIEW_CENTER_X: f32 = 70.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the main camera with orthographic projection, centered on the Sun.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: VIEWPORT_HEIGHT,
            },
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(VIEW_CENTER_X, 0.0, 100.0)
            .looking_at(Vec3::new(VIEW_CENTER_X, 0.0, 0.0), Vec3::Y),
        MainCamera,
    ));
}
