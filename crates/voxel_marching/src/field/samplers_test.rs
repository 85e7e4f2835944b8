use approx::assert_relative_eq;

use super::*;

#[test]
fn test_sphere_value_is_one_at_center_zero_on_surface() {
  let sphere = SphereField::new(GridMapping::centered(9, 4.0), 2.0);

  assert_relative_eq!(sphere.evaluate(Vec3::ZERO), 1.0);
  assert_relative_eq!(sphere.evaluate(Vec3::new(2.0, 0.0, 0.0)), 0.0);
  assert!(sphere.evaluate(Vec3::new(3.0, 0.0, 0.0)) < 0.0);

  // Grid index 4 maps to the world origin
  assert_relative_eq!(sphere.value(4, 4, 4), 1.0);
}

#[test]
fn test_sphere_normal_points_outward() {
  let sphere = SphereField::new(GridMapping::new(4), 1.0).with_center(Vec3::splat(1.5));

  let n = sphere.normal(Vec3::new(2.5, 1.5, 1.5));
  assert_relative_eq!(n.x, 1.0);
  assert_relative_eq!(n.length(), 1.0);

  // Degenerate at the exact center
  assert_eq!(sphere.normal(Vec3::splat(1.5)), Vec3::Y);
}

#[test]
fn test_plane_splits_grid() {
  let plane = PlaneField::new(GridMapping::new(5), 2.0);

  assert!(plane.value(0, 0, 0) > 0.0, "below the plane is positive");
  assert!(plane.value(0, 4, 0) < 0.0, "above the plane is negative");
  assert_relative_eq!(plane.value(3, 2, 1), 0.0);
  assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
}

#[test]
fn test_tilted_plane_normal_is_unit() {
  let plane = PlaneField::new(GridMapping::new(5), 0.0).with_normal(Vec3::new(1.0, 1.0, 0.0));
  assert_relative_eq!(plane.plane_normal.length(), 1.0, epsilon = 1e-6);
  assert_relative_eq!(plane.evaluate(Vec3::new(1.0, -1.0, 0.0)), 0.0, epsilon = 1e-6);
}

#[test]
fn test_metaball_field_crosses_threshold() {
  let ball = Metaball {
    center: Vec3::ZERO,
    radius: 2.0,
    strength: 1.0,
  };
  let field = MetaballsField::new(GridMapping::centered(9, 4.0), vec![ball]);

  // r²/d² == 1 exactly at the radius
  assert_relative_eq!(field.evaluate(Vec3::new(2.0, 0.0, 0.0)), 1.0);
  assert!(field.evaluate(Vec3::new(1.0, 0.0, 0.0)) > field.threshold);
  assert!(field.evaluate(Vec3::new(4.0, 0.0, 0.0)) < field.threshold);

  // Capped near the core instead of blowing up
  assert_relative_eq!(field.evaluate(Vec3::ZERO), 100.0);
}

#[test]
fn test_metaball_normal_points_away_from_ball() {
  let ball = Metaball {
    center: Vec3::ZERO,
    radius: 2.0,
    strength: 1.0,
  };
  let field = MetaballsField::new(GridMapping::new(4), vec![ball]);

  let n = field.normal(Vec3::new(0.0, 0.0, 2.0));
  assert_relative_eq!(n.z, 1.0, epsilon = 1e-6);
}

#[test]
fn test_metaballs_random_is_deterministic() {
  let mapping = GridMapping::centered(16, 10.0);
  let a = MetaballsField::random(mapping, 123, 3, 10.0);
  let b = MetaballsField::random(mapping, 123, 3, 10.0);
  let c = MetaballsField::random(mapping, 124, 3, 10.0);

  assert_eq!(a.balls, b.balls);
  assert_ne!(a.balls, c.balls);

  for ball in &a.balls {
    assert!(ball.center.abs().max_element() <= 10.0);
    assert!(ball.radius >= 1.0 && ball.radius <= 4.0);
  }
}

#[test]
fn test_metaballs_zero_seed_is_usable() {
  let field = MetaballsField::random(GridMapping::new(4), 0, 2, 5.0);
  assert_eq!(field.balls.len(), 2);
  assert!(field.balls.iter().all(|b| b.radius.is_finite()));
}

#[test]
fn test_constant_field_is_constant() {
  let field = ConstantField::new(GridMapping::new(3), -0.5);
  for z in 0..3 {
    for y in 0..3 {
      for x in 0..3 {
        assert_eq!(field.value(x, y, z), -0.5);
      }
    }
  }
}
