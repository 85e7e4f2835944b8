//! Core data types for marching cubes extraction.

use crate::constants::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX};

/// How cells containing a NaN corner sample are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NanPolicy {
  /// NaN compares false against the iso level, so the corner counts as
  /// below the surface. Interpolated positions may still pick up the NaN.
  #[default]
  TreatAsBelow,

  /// Skip any cell with a NaN corner; it contributes no triangles.
  SkipCell,
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }

  /// True if the point lies inside or on the box, within `tolerance`.
  pub fn contains(&self, point: [f32; 3], tolerance: f32) -> bool {
    (0..3).all(|i| point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance)
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extracted triangle soup.
///
/// `vertices` and `normals` are parallel flat buffers: 3 floats per vertex,
/// 3 consecutive vertices per triangle, in cell visitation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshOutput {
  /// Vertex positions in world space.
  pub vertices: Vec<f32>,

  /// Per-vertex normals from the field's analytic normal.
  pub normals: Vec<f32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl MeshOutput {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create output with room for `floats` position (and normal) floats.
  pub fn with_capacity(floats: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(floats),
      normals: Vec::with_capacity(floats),
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.normals.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.vertices.len() / FLOATS_PER_TRIANGLE
  }

  /// Number of vertices in the mesh.
  pub fn vertex_count(&self) -> usize {
    self.vertices.len() / FLOATS_PER_VERTEX
  }

  /// Position of vertex `i`.
  pub fn position(&self, i: usize) -> [f32; 3] {
    let base = i * FLOATS_PER_VERTEX;
    [self.vertices[base], self.vertices[base + 1], self.vertices[base + 2]]
  }

  /// Normal of vertex `i`.
  pub fn normal(&self, i: usize) -> [f32; 3] {
    let base = i * FLOATS_PER_VERTEX;
    [self.normals[base], self.normals[base + 1], self.normals[base + 2]]
  }

  /// Iterate triangles as three positions each.
  pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    self.vertices.chunks_exact(FLOATS_PER_TRIANGLE).map(|t| {
      [
        [t[0], t[1], t[2]],
        [t[3], t[4], t[5]],
        [t[6], t[7], t[8]],
      ]
    })
  }

  /// Append another mesh, keeping triangle grouping.
  pub fn append(&mut self, other: &MeshOutput) {
    self.vertices.extend_from_slice(&other.vertices);
    self.normals.extend_from_slice(&other.normals);
    if other.bounds.is_valid() {
      self.bounds.encapsulate(other.bounds.min);
      self.bounds.encapsulate(other.bounds.max);
    }
  }

  /// Push one triangle (positions and normals) as a unit.
  #[inline]
  pub(crate) fn push_triangle(&mut self, positions: [[f32; 3]; 3], normals: [[f32; 3]; 3]) {
    for (p, n) in positions.iter().zip(normals.iter()) {
      self.vertices.extend_from_slice(p);
      self.normals.extend_from_slice(n);
      self.bounds.encapsulate(*p);
    }
  }
}

/// Configuration for mesh extraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractorConfig {
  /// Handling of NaN corner samples.
  pub nan_policy: NanPolicy,

  /// Reserve `cells * 15` output floats before the first extraction.
  pub reserve_hint: bool,
}

impl ExtractorConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_nan_policy(mut self, policy: NanPolicy) -> Self {
    self.nan_policy = policy;
    self
  }

  pub fn with_reserve_hint(mut self, reserve: bool) -> Self {
    self.reserve_hint = reserve;
    self
  }
}

/// Counters describing the most recent extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionStats {
  /// Cells classified.
  pub cells_visited: u64,

  /// Cells skipped because no edge was crossed.
  pub cells_skipped: u64,

  /// Cells skipped by [`NanPolicy::SkipCell`].
  pub cells_nan_skipped: u64,

  /// Triangles emitted.
  pub triangles: u64,
}

impl ExtractionStats {
  /// Cells that produced at least one triangle.
  pub fn active_cells(&self) -> u64 {
    self.cells_visited - self.cells_skipped - self.cells_nan_skipped
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
