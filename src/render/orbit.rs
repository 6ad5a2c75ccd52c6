//! Mode-dependent overlay: the Earth marker on its orbit in synodic mode,
//! a fixed star reference tick in sidereal mode.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::render::{z_layers, ORBIT_RADIUS};
use crate::types::{RotationMode, SolarClock};

/// Earth marker radius in world units.
const EARTH_RADIUS: f32 = 3.5;

/// Number of dash segments in the orbit ring.
const ORBIT_DASHES: usize = 64;

/// Component marking the Earth marker entity.
#[derive(Component)]
pub struct EarthMarker;

/// Plugin providing the mode overlay.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_earth_marker)
            .add_systems(Update, (sync_earth_marker, draw_mode_overlay));
    }
}

/// Unit vector pointing "up" at angle zero, swept clockwise on screen.
fn orbit_direction(deg: f64) -> Vec2 {
    let angle = (deg as f32).to_radians();
    Vec2::new(angle.sin(), angle.cos())
}

/// Spawn the Earth marker, hidden until synodic mode is selected.
fn spawn_earth_marker(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(59, 130, 246),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Circle::new(EARTH_RADIUS))),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, ORBIT_RADIUS, z_layers::EARTH),
        Visibility::Hidden,
        EarthMarker,
    ));
}

/// Position the Earth marker from the clock and show it only in synodic mode.
fn sync_earth_marker(
    clock: Res<SolarClock>,
    mut markers: Query<(&mut Transform, &mut Visibility), With<EarthMarker>>,
) {
    for (mut transform, mut visibility) in markers.iter_mut() {
        match clock.mode {
            RotationMode::Sidereal => {
                *visibility = Visibility::Hidden;
            }
            RotationMode::Synodic => {
                *visibility = Visibility::Visible;
                let pos = orbit_direction(clock.earth_orbit_deg()) * ORBIT_RADIUS;
                transform.translation = pos.extend(z_layers::EARTH);
            }
        }
    }
}

/// Draw the per-mode gizmo overlay.
fn draw_mode_overlay(clock: Res<SolarClock>, mut gizmos: Gizmos) {
    match clock.mode {
        RotationMode::Sidereal => draw_reference_tick(&mut gizmos),
        RotationMode::Synodic => {
            draw_orbit_ring(&mut gizmos);
            draw_earth_vector(&mut gizmos, clock.earth_orbit_deg());
        }
    }
}

/// Fixed reference marker above the Sun: the direction of the distant stars.
fn draw_reference_tick(gizmos: &mut Gizmos) {
    let z = z_layers::OVERLAY;
    let color = Color::WHITE;

    // Small triangle at the top of the view pointing toward the Sun
    let apex = Vec3::new(0.0, 100.0, z);
    let left = Vec3::new(-2.0, 95.0, z);
    let right = Vec3::new(2.0, 95.0, z);
    gizmos.line(apex, left, color);
    gizmos.line(apex, right, color);
    gizmos.line(left, right, color);

    // Stem below the triangle
    gizmos.line(Vec3::new(0.0, 95.0, z), Vec3::new(0.0, 90.0, z), color);
}

/// Dashed circle marking Earth's orbit path.
fn draw_orbit_ring(gizmos: &mut Gizmos) {
    let z = z_layers::OVERLAY;
    let color = Color::srgba(1.0, 1.0, 1.0, 0.3);

    for i in 0..ORBIT_DASHES {
        // Every other segment is left blank to dash the ring.
        if i % 2 != 0 {
            continue;
        }

        let t0 = i as f32 / ORBIT_DASHES as f32 * TAU;
        let t1 = (i + 1) as f32 / ORBIT_DASHES as f32 * TAU;

        let p0 = Vec3::new(ORBIT_RADIUS * t0.cos(), ORBIT_RADIUS * t0.sin(), z);
        let p1 = Vec3::new(ORBIT_RADIUS * t1.cos(), ORBIT_RADIUS * t1.sin(), z);
        gizmos.line(p0, p1, color);
    }
}

/// Radial arrow on the Earth marker pointing away from the Sun.
fn draw_earth_vector(gizmos: &mut Gizmos, earth_deg: f64) {
    let z = z_layers::OVERLAY;
    let color = Color::WHITE;

    let dir = orbit_direction(earth_deg);
    let base = dir * (ORBIT_RADIUS + EARTH_RADIUS + 1.0);
    let tip = dir * (ORBIT_RADIUS + EARTH_RADIUS + 9.0);

    gizmos.line(base.extend(z), tip.extend(z), color);

    // Arrowhead
    let perp = Vec2::new(-dir.y, dir.x);
    let left = tip - dir * 3.0 + perp * 1.5;
    let right = tip - dir * 3.0 - perp * 1.5;
    gizmos.line(tip.extend(z), left.extend(z), color);
    gizmos.line(tip.extend(z), right.extend(z), color);
}
