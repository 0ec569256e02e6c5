use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::lattice::populate_metric_grids;
use crate::pulse::{instance_emission_materials, pulse_emission, pulse_grid_scale};

/// Lattice generation plus the child-scale pulse
pub struct MetricGridPlugin;

impl Plugin for MetricGridPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (populate_metric_grids, pulse_grid_scale).chain());
    }
}

/// Material emission pulse
pub struct EmissionPulsePlugin;

impl Plugin for EmissionPulsePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (instance_emission_materials, pulse_emission).chain(),
        );
    }
}

/// Both plugins. They don't depend on each other, so either can be used alone.
pub struct MetricLatticePlugins;

impl PluginGroup for MetricLatticePlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(MetricGridPlugin)
            .add(EmissionPulsePlugin)
    }
}
