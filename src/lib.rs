pub mod error;
pub mod lattice;
pub mod plugin;
pub mod pulse;
pub mod scenes;

pub use error::ConfigError;
pub use plugin::{EmissionPulsePlugin, MetricGridPlugin, MetricLatticePlugins};
