//! Background rendering for the Sun visualization.
//!
//! Provides the twinkling starfield and scene lighting.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::render::z_layers;

/// Number of background stars.
const STAR_COUNT: usize = 400;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, twinkle_stars);
    }
}

/// Component for a twinkling star.
#[derive(Component)]
struct Star {
    /// Full twinkle cycle duration in seconds.
    period: f32,
    /// Phase offset so the field doesn't pulse in unison.
    phase: f32,
}

/// Spawn the starfield with randomly placed stars.
///
/// Each star gets its own material so the twinkle system can animate its
/// opacity independently.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_mesh = meshes.add(Circle::new(1.0));

    let mut rng = rand::thread_rng();

    for _ in 0..STAR_COUNT {
        let x = rng.gen_range(-260.0..260.0);
        let y = rng.gen_range(-130.0..130.0);
        let radius = rng.gen_range(0.2..1.0);

        let material = materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(0.6),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_xyz(x, y, z_layers::BACKGROUND).with_scale(Vec3::splat(radius)),
            Star {
                period: rng.gen_range(3.0..8.0),
                phase: rng.gen_range(0.0..TAU),
            },
        ));
    }

    info!("Spawned {STAR_COUNT} background stars");
}

/// Oscillate star opacity between 0.3 and 0.9 on each star's own period.
fn twinkle_stars(
    time: Res<Time>,
    stars: Query<(&Star, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let t = time.elapsed_secs();

    for (star, material_handle) in stars.iter() {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };

        let alpha = 0.6 + 0.3 * (TAU * t / star.period + star.phase).sin();
        material.base_color.set_alpha(alpha);
    }
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Ambient light for general visibility
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.0,
        ..default()
    });
}
