use bevy::prelude::*;

use crate::lattice::{MetricGrid, PointTemplate};
use crate::pulse::{EmissionPulse, GridPulse};

/// Knobs for the demo scene
#[derive(Resource, Debug, Clone)]
pub struct DemoSettings {
    pub grid_size: u32,
    pub spacing: f32,
    pub point_radius: f32,
    pub grid_pulse_speed: f32,
    pub base_intensity: f32,
    pub pulse_frequency: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            grid_size: 10,
            spacing: 2.0,
            point_radius: 0.25,
            grid_pulse_speed: 2.0,
            base_intensity: 1.0,
            pulse_frequency: 0.5,
        }
    }
}

impl DemoSettings {
    /// Distance from the first to the last point along one axis
    pub fn grid_extent(&self) -> f32 {
        self.grid_size.saturating_sub(1) as f32 * self.spacing
    }
}

// Marker components for scene entities
#[derive(Component)]
pub struct GlowingCube;

#[derive(Component)]
pub struct MetricSpace;

/// Camera, light, a glowing cube and a pulsing lattice spanning
/// `[0, extent]³` in world space
pub fn setup_demo_scene(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let extent = settings.grid_extent();
    let centre = Vec3::splat(extent * 0.5);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(
            centre + Vec3::new(extent * 1.2, extent * 0.9, extent * 1.6 + 8.0),
        )
        .looking_at(centre, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(centre, Vec3::Y),
    ));

    commands.spawn((
        GlowingCube,
        Mesh3d(meshes.add(Cuboid::new(1.5, 1.5, 1.5))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.1, 0.1, 0.1),
            ..default()
        })),
        EmissionPulse {
            base_intensity: settings.base_intensity,
            frequency: settings.pulse_frequency,
            ..default()
        },
        Transform::from_translation(centre + Vec3::new(0.0, extent * 0.5 + 3.0, 0.0)),
    ));

    let point_template = PointTemplate {
        mesh: meshes.add(Sphere::new(settings.point_radius)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.8, 0.7, 0.3),
            ..default()
        }),
    };

    commands.spawn((
        MetricSpace,
        MetricGrid::new(settings.grid_size, settings.spacing, point_template),
        GridPulse {
            speed: settings.grid_pulse_speed,
        },
    ));

    info!(
        "Demo scene ready: {}³ grid, spacing {}",
        settings.grid_size, settings.spacing
    );
}
