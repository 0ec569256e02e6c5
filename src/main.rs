use bevy::prelude::*;

use metric_lattice::MetricLatticePlugins;
use metric_lattice::scenes::{DemoSettings, setup_demo_scene};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(MetricLatticePlugins)
        .init_resource::<DemoSettings>()
        .add_systems(Startup, setup_demo_scene)
        .run();
}
