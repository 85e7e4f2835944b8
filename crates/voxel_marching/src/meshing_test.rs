//! Tests for the parallel meshing wrappers.

use glam::Vec3;

use super::*;
use crate::field::{GridMapping, MetaballsField, SampledField, SphereField};

fn sphere(size: usize, radius: f32) -> SphereField {
  SphereField::new(GridMapping::centered(size, 2.0), radius)
}

/// Triangles as raw bits, sorted, for order-independent comparison.
fn triangle_set(output: &MeshOutput) -> Vec<[u32; 9]> {
  let mut tris: Vec<[u32; 9]> = output
    .vertices
    .chunks_exact(9)
    .map(|t| std::array::from_fn(|i| t[i].to_bits()))
    .collect();
  tris.sort_unstable();
  tris
}

// =============================================================================
// Single field
// =============================================================================

#[test]
fn test_mesh_field_produces_mesh() {
  let result = mesh_field(&sphere(24, 1.5), 0.0, &ExtractorConfig::default());

  assert!(!result.output.is_empty());
  assert_eq!(result.stats.triangles as usize, result.output.triangle_count());
  assert_eq!(result.stats.cells_visited, 23 * 23 * 23);
}

#[test]
fn test_mesh_field_matches_extractor() {
  let field = sphere(16, 1.2);
  let mut extractor = MeshExtractor::new();
  extractor.generate(&field, 0.0);

  let result = mesh_field(&field, 0.0, &ExtractorConfig::default());
  assert_eq!(&result.output, extractor.output());
}

#[test]
fn test_mesh_field_records_timing() {
  let field = MetaballsField::random(GridMapping::centered(48, 2.0), 3, 8, 1.5);
  let result = mesh_field(&field, 1.0, &ExtractorConfig::default());

  // Timing should be non-zero for a non-trivial field
  assert!(result.timing_us > 0, "Expected non-zero timing");
}

// =============================================================================
// Batch
// =============================================================================

#[test]
fn test_mesh_batch_empty() {
  let fields: Vec<SphereField> = Vec::new();
  assert!(mesh_batch(&fields, 0.0, &ExtractorConfig::default()).is_empty());
}

#[test]
fn test_mesh_batch_preserves_order() {
  let radii = [0.5, 1.0, 1.5, 0.25, 1.75, 0.75];
  let fields: Vec<SphereField> = radii.iter().map(|&r| sphere(20, r)).collect();

  let results = mesh_batch(&fields, 0.0, &ExtractorConfig::default());
  assert_eq!(results.len(), fields.len());

  for (field, result) in fields.iter().zip(&results) {
    let expected = mesh_field(field, 0.0, &ExtractorConfig::default());
    assert_eq!(result.output, expected.output);
  }
}

#[test]
fn test_mesh_batch_larger_spheres_have_more_triangles() {
  let fields: Vec<SphereField> = [0.5, 1.0, 1.5].iter().map(|&r| sphere(32, r)).collect();
  let results = mesh_batch(&fields, 0.0, &ExtractorConfig::default());

  let counts: Vec<usize> = results.iter().map(|r| r.output.triangle_count()).collect();
  assert!(counts[0] < counts[1] && counts[1] < counts[2], "{counts:?}");
}

// =============================================================================
// Chunked
// =============================================================================

#[test]
fn test_mesh_chunked_matches_whole_field() {
  let field = MetaballsField::random(GridMapping::centered(33, 2.0), 11, 6, 1.5);
  let config = ExtractorConfig::default();

  let whole = mesh_field(&field, 1.0, &config);
  let chunks = mesh_chunked(&field, 8, 1.0, &config).unwrap();
  assert_eq!(chunks.len(), 4 * 4 * 4);

  let merged = merge_chunks(&chunks);
  assert_eq!(merged.triangle_count(), whole.output.triangle_count());
  assert_eq!(triangle_set(&merged), triangle_set(&whole.output));
  assert_eq!(merged.bounds, whole.output.bounds);
}

#[test]
fn test_mesh_chunked_cell_accounting() {
  let field = sphere(17, 1.5);
  let chunks = mesh_chunked(&field, 4, 0.0, &ExtractorConfig::default()).unwrap();

  let visited: u64 = chunks.iter().map(|c| c.result.stats.cells_visited).sum();
  assert_eq!(visited, 16 * 16 * 16);
}

#[test]
fn test_mesh_chunked_order_and_offsets() {
  let field = sphere(9, 1.5);
  let chunks = mesh_chunked(&field, 4, 0.0, &ExtractorConfig::default()).unwrap();

  let offsets: Vec<[usize; 3]> = chunks.iter().map(|c| c.offset).collect();
  assert_eq!(
    offsets,
    vec![
      [0, 0, 0],
      [4, 0, 0],
      [0, 4, 0],
      [4, 4, 0],
      [0, 0, 4],
      [4, 0, 4],
      [0, 4, 4],
      [4, 4, 4],
    ]
  );
}

#[test]
fn test_mesh_chunked_rejects_uneven_tiling() {
  let field = sphere(10, 1.0);
  let err = mesh_chunked(&field, 4, 0.0, &ExtractorConfig::default()).unwrap_err();
  assert_eq!(
    err,
    FieldError::ChunkTiling {
      cells: 9,
      chunk_cells: 4
    }
  );
}

#[test]
fn test_mesh_chunked_sampled_field() {
  let mapping = GridMapping::centered(25, 2.0);
  let field = SampledField::from_fn(mapping, |p| 1.0 - (p - Vec3::new(0.3, 0.0, -0.2)).length()).unwrap();

  let chunks = mesh_chunked(&field, 6, 0.0, &ExtractorConfig::default()).unwrap();
  let merged = merge_chunks(&chunks);
  let whole = mesh_field(&field, 0.0, &ExtractorConfig::default());

  assert!(!merged.is_empty());
  assert_eq!(triangle_set(&merged), triangle_set(&whole.output));
}

#[test]
fn test_merge_chunks_empty() {
  let merged = merge_chunks(&[]);
  assert!(merged.is_empty());
  assert!(!merged.bounds.is_valid());
}
