use bevy::prelude::*;

use crate::error::ConfigError;

/// Grids bigger than this still spawn, but get a warning in the log
pub const LARGE_GRID_POINTS: usize = 100_000;

/// Label used when a grid does not bring its own
pub const DEFAULT_LABEL_TEMPLATE: &str = "Metric point ({x},{y},{z})";

/// Prefab cloned once per lattice point
#[derive(Debug, Clone)]
pub struct PointTemplate {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Container that fills itself with a `grid_size³` cubic lattice of points
/// the first time it is seen.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct MetricGrid {
    /// Points per axis
    pub grid_size: u32,

    /// Distance between neighbouring points, in world units
    pub spacing: f32,

    /// Name given to each point; `{x}`, `{y}` and `{z}` are replaced with
    /// the point's lattice coordinates
    pub label_template: String,

    pub point_template: Option<PointTemplate>,
}

impl Default for MetricGrid {
    fn default() -> Self {
        Self {
            grid_size: 10,
            spacing: 2.0,
            label_template: DEFAULT_LABEL_TEMPLATE.to_string(),
            point_template: None,
        }
    }
}

impl MetricGrid {
    pub fn new(grid_size: u32, spacing: f32, point_template: PointTemplate) -> Self {
        Self {
            grid_size,
            spacing,
            point_template: Some(point_template),
            ..default()
        }
    }

    pub fn with_label_template(mut self, template: impl Into<String>) -> Self {
        self.label_template = template.into();
        self
    }

    /// Total number of points, `None` if `grid_size³` does not fit a usize
    pub fn point_count(&self) -> Option<usize> {
        usize::try_from(self.grid_size).ok()?.checked_pow(3)
    }

    /// Check everything the generator needs before it spawns anything.
    /// Returns the template to instantiate.
    pub fn validate(&self, container: Entity) -> Result<&PointTemplate, ConfigError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                container,
                spacing: self.spacing,
            });
        }
        if self.point_count().is_none() {
            return Err(ConfigError::GridTooLarge {
                grid_size: self.grid_size,
            });
        }
        self.point_template
            .as_ref()
            .ok_or(ConfigError::MissingPointTemplate { container })
    }
}

/// Marks a generated point and remembers where in the lattice it sits
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticePoint {
    pub coord: UVec3,
}

/// Entities generated for a [`MetricGrid`], in creation order
#[derive(Component, Debug, Default, Clone)]
pub struct LatticePoints(pub Vec<Entity>);

impl LatticePoints {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().copied()
    }
}

/// Every coordinate in `[0, grid_size)³`, x-major, then y, then z
pub fn lattice_coords(grid_size: u32) -> impl Iterator<Item = UVec3> {
    (0..grid_size).flat_map(move |x| {
        (0..grid_size).flat_map(move |y| (0..grid_size).map(move |z| UVec3::new(x, y, z)))
    })
}

/// World-space position of a lattice coordinate
#[inline]
pub fn lattice_position(coord: UVec3, spacing: f32) -> Vec3 {
    coord.as_vec3() * spacing
}

pub fn point_label(template: &str, coord: UVec3) -> String {
    template
        .replace("{x}", &coord.x.to_string())
        .replace("{y}", &coord.y.to_string())
        .replace("{z}", &coord.z.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> PointTemplate {
        PointTemplate {
            mesh: Handle::default(),
            material: Handle::default(),
        }
    }

    #[test]
    fn test_coord_count_is_cubic() {
        for n in 0..6u32 {
            assert_eq!(lattice_coords(n).count(), (n * n * n) as usize);
        }
    }

    #[test]
    fn test_coord_order_is_x_major() {
        let coords: Vec<UVec3> = lattice_coords(2).collect();
        assert_eq!(coords[0], UVec3::new(0, 0, 0));
        assert_eq!(coords[1], UVec3::new(0, 0, 1));
        assert_eq!(coords[2], UVec3::new(0, 1, 0));
        assert_eq!(coords[4], UVec3::new(1, 0, 0));
        assert_eq!(coords[7], UVec3::new(1, 1, 1));
    }

    #[test]
    fn test_positions_are_exact_multiples() {
        let spacing = 0.3;
        for coord in lattice_coords(5) {
            let pos = lattice_position(coord, spacing);
            assert_eq!(pos.x, coord.x as f32 * spacing);
            assert_eq!(pos.y, coord.y as f32 * spacing);
            assert_eq!(pos.z, coord.z as f32 * spacing);
        }
    }

    #[test]
    fn test_label_substitution() {
        let coord = UVec3::new(3, 0, 12);
        assert_eq!(point_label(DEFAULT_LABEL_TEMPLATE, coord), "Metric point (3,0,12)");
        assert_eq!(point_label("p-{z}-{y}-{x}", coord), "p-12-0-3");
        assert_eq!(point_label("static", coord), "static");
    }

    #[test]
    fn test_validate_rejects_missing_template() {
        let grid = MetricGrid::default();
        let container = Entity::from_raw(7);
        assert_eq!(
            grid.validate(container).unwrap_err(),
            ConfigError::MissingPointTemplate { container }
        );
    }

    #[test]
    fn test_validate_rejects_bad_spacing() {
        let container = Entity::from_raw(1);
        for spacing in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let grid = MetricGrid::new(2, spacing, template());
            assert!(matches!(
                grid.validate(container),
                Err(ConfigError::InvalidSpacing { .. })
            ));
        }
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let grid = MetricGrid::new(0, 1.0, template());
        assert_eq!(grid.point_count(), Some(0));
        assert!(grid.validate(Entity::from_raw(0)).is_ok());
    }

    #[test]
    fn test_point_count_overflow() {
        let grid = MetricGrid::new(u32::MAX, 1.0, template());
        if usize::BITS <= 64 {
            assert_eq!(grid.point_count(), None);
            assert_eq!(
                grid.validate(Entity::from_raw(0)).unwrap_err(),
                ConfigError::GridTooLarge { grid_size: u32::MAX }
            );
        }
    }
}
