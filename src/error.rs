use bevy::prelude::Entity;
use thiserror::Error;

/// Startup configuration problems. None of these are recoverable: the
/// component cannot produce its effect, so the owning system bails out with
/// the diagnostic instead of leaving half-built state behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("metric grid {container} has no point template assigned")]
    MissingPointTemplate { container: Entity },

    #[error("metric grid {container} has invalid spacing {spacing} (must be finite and > 0)")]
    InvalidSpacing { container: Entity, spacing: f32 },

    #[error("grid size {grid_size} overflows the point count")]
    GridTooLarge { grid_size: u32 },

    #[error("emission pulse on {entity} has no standard material to drive")]
    MissingMaterial { entity: Entity },
}
