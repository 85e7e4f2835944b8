use approx::assert_relative_eq;

use super::*;

#[test]
fn test_grid_mapping_unit() {
  let mapping = GridMapping::new(4);
  assert_eq!(mapping.world_position(0, 0, 0), Vec3::ZERO);
  assert_eq!(mapping.world_position(3, 2, 1), Vec3::new(3.0, 2.0, 1.0));
  assert_eq!(mapping.extent(), 3.0);
  assert_eq!(mapping.sample_count(), 64);
}

#[test]
fn test_grid_mapping_centered() {
  let mapping = GridMapping::centered(5, 2.0);
  assert_relative_eq!(mapping.spacing, 1.0);
  assert_eq!(mapping.world_position(0, 0, 0), Vec3::splat(-2.0));
  assert_eq!(mapping.world_position(4, 4, 4), Vec3::splat(2.0));
  assert_eq!(mapping.world_position(2, 2, 2), Vec3::ZERO);
}

#[test]
fn test_grid_coords_inverts_world_position() {
  let mapping = GridMapping::new(8)
    .with_origin(Vec3::new(10.0, -3.0, 0.5))
    .with_spacing(0.25);

  let world = mapping.world_position(5, 1, 7);
  let grid = mapping.grid_coords(world);
  assert_relative_eq!(grid.x, 5.0, epsilon = 1e-5);
  assert_relative_eq!(grid.y, 1.0, epsilon = 1e-5);
  assert_relative_eq!(grid.z, 7.0, epsilon = 1e-5);
}

#[test]
fn test_linear_index_x_fastest() {
  let mapping = GridMapping::new(3);
  assert_eq!(mapping.linear_index(0, 0, 0), 0);
  assert_eq!(mapping.linear_index(1, 0, 0), 1);
  assert_eq!(mapping.linear_index(0, 1, 0), 3);
  assert_eq!(mapping.linear_index(0, 0, 1), 9);
  assert_eq!(mapping.linear_index(2, 2, 2), 26);
}

#[test]
fn test_normalize_or_up() {
  assert_eq!(normalize_or_up(Vec3::ZERO), Vec3::Y);
  assert_eq!(normalize_or_up(Vec3::splat(f32::NAN)), Vec3::Y);
  assert_relative_eq!(normalize_or_up(Vec3::new(3.0, 0.0, 4.0)).length(), 1.0);
}

fn center_value<F: ScalarField>(field: F) -> (usize, f32, Vec3) {
  (field.size(), field.value(1, 1, 1), field.world_position(2, 0, 0))
}

#[test]
fn test_reference_field_delegates() {
  let field = ConstantField::new(GridMapping::new(3), 0.25);
  let (size, value, world) = center_value(&field);

  assert_eq!(size, 3);
  assert_eq!(value, 0.25);
  assert_eq!(world, Vec3::new(2.0, 0.0, 0.0));
  assert_eq!((&field).normal(Vec3::ZERO), Vec3::Y);
}

#[test]
fn test_field_error_messages() {
  let err = FieldError::SampleCount {
    expected: 27,
    actual: 26,
  };
  assert_eq!(err.to_string(), "expected 27 samples for the grid, got 26");

  let err = FieldError::TooSmall { size: 1 };
  assert!(err.to_string().contains("at least 2"));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out of range")]
fn test_linear_index_checks_each_axis() {
  GridMapping::new(3).linear_index(3, 0, 0);
}
