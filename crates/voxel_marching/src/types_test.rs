use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_contains_with_tolerance() {
  let aabb = MinMaxAABB::new([0.0; 3], [1.0; 3]);
  assert!(aabb.contains([0.5, 0.5, 0.5], 0.0));
  assert!(aabb.contains([1.0, 0.0, 1.0], 0.0));
  assert!(!aabb.contains([1.01, 0.5, 0.5], 0.0));
  assert!(aabb.contains([1.01, 0.5, 0.5], 0.02));
}

#[test]
fn test_mesh_output_push_and_clear() {
  let mut output = MeshOutput::new();
  output.push_triangle(
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 1.0]; 3],
  );

  assert_eq!(output.triangle_count(), 1);
  assert_eq!(output.vertex_count(), 3);
  assert_eq!(output.vertices.len(), output.normals.len());
  assert_eq!(output.position(1), [1.0, 0.0, 0.0]);
  assert_eq!(output.normal(2), [0.0, 0.0, 1.0]);
  assert_eq!(output.bounds.max, [1.0, 1.0, 0.0]);

  let capacity = output.vertices.capacity();
  output.clear();

  assert!(output.is_empty());
  assert_eq!(output.triangle_count(), 0);
  assert_eq!(output.vertices.capacity(), capacity);
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_mesh_output_triangles_iter() {
  let mut output = MeshOutput::new();
  let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
  output.push_triangle(tri, [[0.0, 0.0, 1.0]; 3]);
  output.push_triangle(tri, [[0.0, 0.0, 1.0]; 3]);

  let tris: Vec<_> = output.triangles().collect();
  assert_eq!(tris.len(), 2);
  assert_eq!(tris[0], tri);
}

#[test]
fn test_mesh_output_append() {
  let mut a = MeshOutput::new();
  a.push_triangle([[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], [[0.0, 0.0, 1.0]; 3]);
  let mut b = MeshOutput::new();
  b.push_triangle([[5.0; 3], [6.0, 5.0, 5.0], [5.0, 6.0, 5.0]], [[0.0, 0.0, 1.0]; 3]);

  a.append(&b);
  a.append(&MeshOutput::new());

  assert_eq!(a.triangle_count(), 2);
  assert_eq!(a.bounds.min, [0.0, 0.0, 0.0]);
  assert_eq!(a.bounds.max, [6.0, 6.0, 5.0]);
}

#[test]
fn test_extractor_config_builder() {
  let config = ExtractorConfig::new()
    .with_nan_policy(NanPolicy::SkipCell)
    .with_reserve_hint(true);

  assert_eq!(config.nan_policy, NanPolicy::SkipCell);
  assert!(config.reserve_hint);
  assert_eq!(ExtractorConfig::default().nan_policy, NanPolicy::TreatAsBelow);
}

#[test]
fn test_stats_active_cells() {
  let stats = ExtractionStats {
    cells_visited: 27,
    cells_skipped: 20,
    cells_nan_skipped: 2,
    triangles: 9,
  };
  assert_eq!(stats.active_cells(), 5);
}
