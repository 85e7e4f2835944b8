//! Marching cubes isosurface extraction.
//!
//! Converts a sampled scalar field into a triangle soup approximating the
//! surface `value == iso_level`. Every cell is triangulated independently
//! from the classic edge and triangle tables, so shared vertices are
//! duplicated and the output carries no index buffer.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: &impl ScalarField  - N³ samples, world mapping, normals │
//! │  iso_level: f32            - surface threshold                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Classification                      │
//! │  For each cell (Z outer, Y middle, X inner):                    │
//! │    Load 8 corner values in canonical corner order               │
//! │    Bit i set iff value[i] > iso_level                           │
//! │    Early-out if EDGE_TABLE[index] == 0                          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Edge Vertices                       │
//! │  For each edge set in the edge mask:                            │
//! │    Linear interpolation between its two corner positions        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangles                           │
//! │  For each edge triple in TRI_TABLE[index]:                      │
//! │    Emit 3 positions + 3 field normals                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<f32>  - 9 floats per triangle                    │
//! │  normals:  Vec<f32>  - parallel to vertices                     │
//! │  bounds:   AABB      - mesh bounding box                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The extractor owns its scratch arrays and output buffers and reuses them
//! across calls. Per-cell work never allocates; the output vectors grow
//! amortized. One extractor is not meant to be shared between threads, but
//! separate extractors over the same field may run concurrently.

mod cube_index;
mod interpolate;

pub use cube_index::{build as cube_index, has_nan};
pub use interpolate::{interpolate_edge, interpolation_factor};

use glam::Vec3;

use crate::constants::{cell_count, CORNER_OFFSETS, EDGE_CORNERS, RESERVE_FLOATS_PER_CELL};
use crate::edge_table::edge_mask;
use crate::field::ScalarField;
use crate::tri_table;
use crate::types::{ExtractionStats, ExtractorConfig, MeshOutput, NanPolicy};

/// Reusable marching cubes mesh extractor.
///
/// ```
/// use voxel_marching::{GridMapping, MeshExtractor, SphereField};
///
/// let field = SphereField::new(GridMapping::centered(16, 1.5), 1.0);
/// let mut extractor = MeshExtractor::new();
/// extractor.generate(&field, 0.0);
///
/// assert!(extractor.triangle_count() > 0);
/// assert_eq!(extractor.vertices().len(), extractor.triangle_count() * 9);
/// ```
#[derive(Debug, Default)]
pub struct MeshExtractor {
  config: ExtractorConfig,

  // Per-cell scratch, overwritten for every cell
  corner_values: [f32; 8],
  corner_positions: [Vec3; 8],
  edge_positions: [Vec3; 12],

  output: MeshOutput,
  stats: ExtractionStats,
}

impl MeshExtractor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ExtractorConfig) -> Self {
    Self {
      config,
      ..Self::default()
    }
  }

  pub fn config(&self) -> &ExtractorConfig {
    &self.config
  }

  /// Extract the isosurface of `field` at `iso_level`.
  ///
  /// Replaces the previous output. Fields with fewer than 2 samples per
  /// axis have no cells and produce an empty mesh.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_cubes::generate"))]
  pub fn generate<F: ScalarField + ?Sized>(&mut self, field: &F, iso_level: f32) -> &MeshOutput {
    self.output.clear();
    self.stats = ExtractionStats::default();

    let size = field.size();
    if size < 2 {
      return &self.output;
    }

    if self.config.reserve_hint {
      let floats = cell_count(size) * RESERVE_FLOATS_PER_CELL;
      self.output.vertices.reserve(floats);
      self.output.normals.reserve(floats);
    }

    let last = size - 2;
    for z in 0..=last {
      for y in 0..=last {
        for x in 0..=last {
          self.process_cell(field, [x, y, z], iso_level);
        }
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      size,
      iso_level,
      cells = self.stats.cells_visited,
      active = self.stats.active_cells(),
      nan_skipped = self.stats.cells_nan_skipped,
      triangles = self.stats.triangles,
      "marching cubes extraction complete"
    );

    &self.output
  }

  #[inline]
  fn process_cell<F: ScalarField + ?Sized>(&mut self, field: &F, cell: [usize; 3], iso_level: f32) {
    let [x, y, z] = cell;
    self.stats.cells_visited += 1;

    for (value, [dx, dy, dz]) in self.corner_values.iter_mut().zip(CORNER_OFFSETS) {
      *value = field.value(x + dx, y + dy, z + dz);
    }

    if self.config.nan_policy == NanPolicy::SkipCell && has_nan(&self.corner_values) {
      self.stats.cells_nan_skipped += 1;
      return;
    }

    let index = cube_index(&self.corner_values, iso_level);
    let edges = edge_mask(index);
    if edges == 0 {
      self.stats.cells_skipped += 1;
      return;
    }

    for (position, [dx, dy, dz]) in self.corner_positions.iter_mut().zip(CORNER_OFFSETS) {
      *position = field.world_position(x + dx, y + dy, z + dz);
    }

    for (edge, [a, b]) in EDGE_CORNERS.iter().enumerate() {
      if edges & (1 << edge) == 0 {
        continue;
      }
      let (a, b) = (*a as usize, *b as usize);
      self.edge_positions[edge] = interpolate_edge(
        self.corner_positions[a],
        self.corner_positions[b],
        self.corner_values[a],
        self.corner_values[b],
        iso_level,
      );
    }

    for [e0, e1, e2] in tri_table::triangles(index) {
      let corners = [self.edge_positions[e0], self.edge_positions[e1], self.edge_positions[e2]];
      self.output.push_triangle(
        corners.map(|p| p.to_array()),
        corners.map(|p| field.normal(p).to_array()),
      );
      self.stats.triangles += 1;
    }
  }

  /// Triangles produced by the most recent [`generate`](Self::generate).
  pub fn triangle_count(&self) -> usize {
    self.output.triangle_count()
  }

  /// Flat vertex positions, 9 floats per triangle.
  pub fn vertices(&self) -> &[f32] {
    &self.output.vertices
  }

  /// Flat per-vertex normals, parallel to [`vertices`](Self::vertices).
  pub fn normals(&self) -> &[f32] {
    &self.output.normals
  }

  pub fn output(&self) -> &MeshOutput {
    &self.output
  }

  /// Move the current mesh out, leaving the extractor empty.
  ///
  /// The next extraction starts from unallocated buffers.
  pub fn take_output(&mut self) -> MeshOutput {
    std::mem::take(&mut self.output)
  }

  /// Counters from the most recent extraction.
  pub fn last_stats(&self) -> ExtractionStats {
    self.stats
  }
}

/// One-shot extraction into a fresh [`MeshOutput`].
pub fn generate<F: ScalarField + ?Sized>(
  field: &F,
  iso_level: f32,
  config: &ExtractorConfig,
) -> MeshOutput {
  let mut extractor = MeshExtractor::with_config(config.clone());
  extractor.generate(field, iso_level);
  extractor.take_output()
}
