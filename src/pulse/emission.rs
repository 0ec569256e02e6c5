use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use super::oscillator::Oscillator;
use crate::error::ConfigError;

/// Makes the entity's material glow, with the emission multiplier swinging
/// around `base_intensity`.
///
/// The entity needs a `MeshMaterial3d<StandardMaterial>`. Once that material
/// has loaded, it is replaced with a private copy so other entities sharing
/// the original asset keep their own emission.
#[derive(Component, Debug, Clone, Copy)]
pub struct EmissionPulse {
    pub base_intensity: f32,
    /// Angular frequency (radians per second)
    pub frequency: f32,
    pub color: LinearRgba,
}

impl Default for EmissionPulse {
    fn default() -> Self {
        Self {
            base_intensity: 1.0,
            frequency: 0.5,
            color: LinearRgba::GREEN,
        }
    }
}

impl EmissionPulse {
    pub fn oscillator(&self) -> Oscillator {
        Oscillator::emission(self.base_intensity, self.frequency)
    }

    /// Emissive color at elapsed time `t`
    pub fn emissive_at(&self, t: f32) -> LinearRgba {
        self.color * self.oscillator().sample(t)
    }
}

/// Set once a pulsing entity drives its own copy of its material
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EmissionMaterialInstanced;

/// Gives each pulsing entity its own material instance.
///
/// Entities whose material is still loading are left for a later tick.
/// Only an entity without any `MeshMaterial3d<StandardMaterial>` is an error.
pub fn instance_emission_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pulses: Query<
        (Entity, Option<&mut MeshMaterial3d<StandardMaterial>>),
        (With<EmissionPulse>, Without<EmissionMaterialInstanced>),
    >,
) -> Result<(), BevyError> {
    for (entity, mesh_material) in &mut pulses {
        let Some(mut mesh_material) = mesh_material else {
            return Err(ConfigError::MissingMaterial { entity }.into());
        };
        let Some(source) = materials.get(&mesh_material.0) else {
            continue;
        };
        let instance = source.clone();

        mesh_material.0 = materials.add(instance);
        commands.entity(entity).insert(EmissionMaterialInstanced);
        debug!("Emission pulse on {} got its own material instance", entity);
    }

    Ok(())
}

/// Rewrites the emissive color of every instanced pulsing material for this
/// tick
pub fn pulse_emission(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pulses: Query<
        (&EmissionPulse, &MeshMaterial3d<StandardMaterial>),
        With<EmissionMaterialInstanced>,
    >,
) {
    let t = time.elapsed_secs();

    for (pulse, mesh_material) in &pulses {
        if let Some(material) = materials.get_mut(&mesh_material.0) {
            material.emissive = pulse.emissive_at(t);
        }
    }
}
