use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use super::grid::*;
use crate::error::ConfigError;

/// Fills every newly added [`MetricGrid`] with its lattice of points.
///
/// Runs once per container: points are spawned as children of the container
/// at their world-space lattice position with identity world rotation, and
/// get a [`LatticePoint`] marker and a [`Name`] built from the grid's label
/// template. The container receives a [`LatticePoints`] list of the spawned
/// entities.
///
/// A grid that fails validation spawns nothing. The remaining grids added in
/// the same frame are still populated, then the first [`ConfigError`] is
/// returned.
pub fn populate_metric_grids(
    mut commands: Commands,
    grids: Query<(Entity, &MetricGrid), Added<MetricGrid>>,
    transforms: Query<&Transform>,
    parents: Query<&ChildOf>,
) -> Result<(), BevyError> {
    let mut first_error: Option<ConfigError> = None;

    for (container, grid) in &grids {
        let template = match grid.validate(container) {
            Ok(template) => template,
            Err(err) => {
                if first_error.is_some() {
                    error!("{}", err);
                } else {
                    first_error = Some(err);
                }
                continue;
            }
        };
        let point_count = grid.point_count().unwrap_or_default();

        if point_count > LARGE_GRID_POINTS {
            warn!(
                "Metric grid {} will spawn {} points (grid size {}), expect a heavy frame cost",
                container, point_count, grid.grid_size
            );
        }

        let container_global = world_transform(container, &transforms, &parents);
        let mut points = Vec::with_capacity(point_count);
        commands.entity(container).with_children(|parent| {
            for coord in lattice_coords(grid.grid_size) {
                let world_position = lattice_position(coord, grid.spacing);
                let point = parent
                    .spawn((
                        LatticePoint { coord },
                        Name::new(point_label(&grid.label_template, coord)),
                        Mesh3d(template.mesh.clone()),
                        MeshMaterial3d(template.material.clone()),
                        local_placement(world_position, &container_global),
                    ))
                    .id();
                points.push(point);
            }
        });
        commands.entity(container).insert(LatticePoints(points));

        info!(
            "Metric grid {} populated with {} points (spacing {})",
            container, point_count, grid.spacing
        );
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// World transform of `entity` built from the local transforms up its parent
/// chain. Unlike `GlobalTransform`, this is correct before propagation has
/// run, i.e. on the frame the entity was spawned.
pub fn world_transform(
    entity: Entity,
    transforms: &Query<&Transform>,
    parents: &Query<&ChildOf>,
) -> GlobalTransform {
    let mut global = GlobalTransform::from(transforms.get(entity).copied().unwrap_or_default());
    let mut current = entity;

    while let Ok(child_of) = parents.get(current) {
        current = child_of.parent();
        let local = transforms.get(current).copied().unwrap_or_default();
        global = GlobalTransform::from(local) * global;
    }

    global
}

/// Local transform that puts a child of `parent` at `world_position` with
/// identity world rotation and unit world scale
pub fn local_placement(world_position: Vec3, parent: &GlobalTransform) -> Transform {
    if *parent == GlobalTransform::IDENTITY {
        // keeps positions bit-exact for untransformed containers
        return Transform::from_translation(world_position);
    }
    GlobalTransform::from_translation(world_position).reparented_to(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_parent_is_exact() {
        let placement = local_placement(Vec3::new(0.3, 0.6, 0.9), &GlobalTransform::IDENTITY);
        assert_eq!(placement.translation, Vec3::new(0.3, 0.6, 0.9));
        assert_eq!(placement.rotation, Quat::IDENTITY);
        assert_eq!(placement.scale, Vec3::ONE);
    }

    #[test]
    fn test_offset_parent_is_compensated() {
        let parent = GlobalTransform::from_xyz(-1.0, 4.0, 2.0);
        let placement = local_placement(Vec3::new(2.0, 0.0, 2.0), &parent);
        let world = parent.mul_transform(placement);
        assert!(world.translation().abs_diff_eq(Vec3::new(2.0, 0.0, 2.0), 1e-5));
    }

    #[test]
    fn test_rotated_scaled_parent_is_compensated() {
        let parent = GlobalTransform::from(
            Transform::from_xyz(3.0, 0.0, -2.0)
                .with_rotation(Quat::from_rotation_y(0.7))
                .with_scale(Vec3::splat(2.0)),
        );
        let target = Vec3::new(4.0, 2.0, 6.0);
        let world = parent.mul_transform(local_placement(target, &parent));

        assert!(world.translation().abs_diff_eq(target, 1e-4));
        let (scale, rotation, _) = world.to_scale_rotation_translation();
        assert!(scale.abs_diff_eq(Vec3::ONE, 1e-4));
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, 1e-4));
    }
}
