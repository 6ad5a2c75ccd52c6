//! Shell diagram rendering: the Sun cross-section, sunspots, and the
//! rotation marker.

use bevy::prelude::*;

use crate::layers::{self, SunLayerId};
use crate::render::{z_layers, SUN_SCALE};
use crate::types::SolarClock;

/// Z step between stacked shell discs.
const SHELL_Z_STEP: f32 = 0.1;

/// Length of the rotation marker from the center, in unscaled diagram units.
const MARKER_LENGTH: f32 = 75.0;

/// Sunspot placement: local offset from the Sun's center (unscaled diagram
/// units), radius, and opacity.
const SUNSPOTS: [(Vec2, f32, f32); 3] = [
    (Vec2::new(50.0, -45.0), 4.0, 0.6),
    (Vec2::new(-60.0, 30.0), 5.0, 0.5),
    (Vec2::new(0.0, 68.0), 3.5, 0.7),
];

/// Component marking an entity as a shell disc.
#[derive(Component)]
pub struct SunLayerDisc {
    /// Which shell this disc renders.
    pub id: SunLayerId,
}

/// Anchor whose rotation carries the sunspots around the Sun's axis.
#[derive(Component)]
pub struct SunspotAnchor;

/// Plugin providing the shell diagram.
pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun)
            .add_systems(Update, (sync_sun_rotation, draw_rotation_marker));
    }
}

/// Spawn the shell discs, outermost first so inner shells paint on top,
/// plus the sunspot anchor.
fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if let Err(e) = layers::validate() {
        error!("Sun layer catalog invalid: {e}");
    }

    for (i, layer) in layers::all_layers().iter().rev().enumerate() {
        let color = match layers::parse_hex_color(layer.color) {
            Ok(color) => color,
            Err(e) => {
                warn!("{} layer: {e}, falling back to white", layer.name);
                Color::WHITE
            }
        };

        let material = materials.add(StandardMaterial {
            base_color: color.with_alpha(layer.opacity),
            emissive: if layer.glow {
                color.to_linear() * 2.0
            } else {
                LinearRgba::BLACK
            },
            unlit: true,
            alpha_mode: if layer.opacity < 1.0 {
                AlphaMode::Blend
            } else {
                AlphaMode::Opaque
            },
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(Circle::new(layer.radius * SUN_SCALE))),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, 0.0, z_layers::SUN_BASE + i as f32 * SHELL_Z_STEP),
            SunLayerDisc { id: layer.id },
        ));
    }

    spawn_sunspots(&mut commands, meshes.into_inner(), materials.into_inner());

    info!("Spawned {} sun layers", layers::all_layers().len());
}

/// Spawn the sunspot anchor with its dark spots as children.
fn spawn_sunspots(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands
        .spawn((
            Transform::from_xyz(0.0, 0.0, z_layers::SUN_MARKS)
                .with_scale(Vec3::splat(SUN_SCALE)),
            Visibility::default(),
            SunspotAnchor,
        ))
        .with_children(|parent| {
            for (offset, radius, opacity) in SUNSPOTS {
                let material = materials.add(StandardMaterial {
                    base_color: Color::BLACK.with_alpha(opacity),
                    unlit: true,
                    alpha_mode: AlphaMode::Blend,
                    ..default()
                });

                parent.spawn((
                    Mesh3d(meshes.add(Circle::new(radius))),
                    MeshMaterial3d(material),
                    Transform::from_translation(offset.extend(0.0)),
                ));
            }
        });
}

/// Keep the sunspot anchor's rotation in step with the clock.
fn sync_sun_rotation(
    clock: Res<SolarClock>,
    mut anchors: Query<&mut Transform, With<SunspotAnchor>>,
) {
    let angle = (clock.sun_rotation_deg() as f32).to_radians();

    for mut transform in anchors.iter_mut() {
        // Negative: the diagram rotates clockwise on screen.
        transform.rotation = Quat::from_rotation_z(-angle);
    }
}

/// Draw the rotation marker arrow from the center toward the surface.
fn draw_rotation_marker(clock: Res<SolarClock>, mut gizmos: Gizmos) {
    let angle = (clock.sun_rotation_deg() as f32).to_radians();
    // Unit vector pointing "up" at angle zero, swept clockwise.
    let dir = Vec2::new(angle.sin(), angle.cos());

    let z = z_layers::SUN_MARKS + 0.05;
    let tip = dir * MARKER_LENGTH * SUN_SCALE;
    let color = Color::BLACK;

    gizmos.line(Vec3::new(0.0, 0.0, z), tip.extend(z), color);

    // Arrowhead
    let perp = Vec2::new(-dir.y, dir.x);
    let left = tip - dir * 3.0 + perp * 1.5;
    let right = tip - dir * 3.0 - perp * 1.5;
    gizmos.line(tip.extend(z), left.extend(z), color);
    gizmos.line(tip.extend(z), right.extend(z), color);
}
