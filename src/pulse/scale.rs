use bevy::prelude::*;

use super::oscillator::Oscillator;

/// Pulses the local scale of every direct child of the entity it sits on
#[derive(Component, Debug, Clone, Copy)]
pub struct GridPulse {
    /// Angular speed of the pulse (radians per second)
    pub speed: f32,
}

impl Default for GridPulse {
    fn default() -> Self {
        Self { speed: 2.0 }
    }
}

impl GridPulse {
    pub fn oscillator(&self) -> Oscillator {
        Oscillator::scale(self.speed)
    }
}

/// Writes the same uniform scale into every child of each pulsing container.
/// Containers without children never match the query.
pub fn pulse_grid_scale(
    time: Res<Time>,
    containers: Query<(&GridPulse, &Children)>,
    mut transforms: Query<&mut Transform>,
) {
    let t = time.elapsed_secs();

    for (pulse, children) in &containers {
        let scale = Vec3::splat(pulse.oscillator().sample(t));
        let children: &[Entity] = children;

        for &child in children {
            if let Ok(mut transform) = transforms.get_mut(child) {
                transform.scale = scale;
            }
        }
    }
}
