//! Scalar field collaborators consumed by the extractor.
//!
//! A field is an N³ grid of samples plus two mappings the extractor needs:
//! grid index → world position, and world position → analytic normal.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ ScalarField                                                  │
//! │   size()                   N samples per axis                │
//! │   value(x, y, z)           sample at integer grid index      │
//! │   world_position(x, y, z)  grid index → world space          │
//! │   normal(world)            analytic normal at a world point  │
//! └──────────────────────────────────────────────────────────────┘
//!        ▲               ▲                ▲               ▲
//!   SphereField    MetaballsField    SampledField     ChunkView
//!   PlaneField     ConstantField     (dense grid)     (window)
//! ```
//!
//! Normals point toward decreasing field value, i.e. out of the region the
//! extractor classifies as "above" the iso level.

mod chunk;
mod sampled;
mod samplers;

pub use chunk::ChunkView;
pub use sampled::SampledField;
pub use samplers::{ConstantField, Metaball, MetaballsField, PlaneField, SphereField};

use glam::Vec3;
use thiserror::Error;

/// Sampled 3D scalar field.
///
/// Indices passed to [`value`](Self::value) and
/// [`world_position`](Self::world_position) are always in `0..size()`.
pub trait ScalarField {
  /// Samples per axis.
  fn size(&self) -> usize;

  /// Sampled value at a grid index.
  fn value(&self, x: usize, y: usize, z: usize) -> f32;

  /// World position of a grid index.
  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3;

  /// Normal at a world position. Unit length by convention; not enforced.
  fn normal(&self, world: Vec3) -> Vec3;
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
  #[inline]
  fn size(&self) -> usize {
    (**self).size()
  }

  #[inline]
  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    (**self).value(x, y, z)
  }

  #[inline]
  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    (**self).world_position(x, y, z)
  }

  #[inline]
  fn normal(&self, world: Vec3) -> Vec3 {
    (**self).normal(world)
  }
}

/// Errors raised while constructing fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
  #[error("grid needs at least 2 samples per axis, got {size}")]
  TooSmall { size: usize },

  #[error("expected {expected} samples for the grid, got {actual}")]
  SampleCount { expected: usize, actual: usize },

  #[error("chunk at {offset:?} with {size} samples exceeds field of {field_size} samples")]
  ChunkOutOfBounds {
    offset: [usize; 3],
    size: usize,
    field_size: usize,
  },

  #[error("{cells} cells per axis cannot be tiled into chunks of {chunk_cells} cells")]
  ChunkTiling { cells: usize, chunk_cells: usize },
}

/// Uniform mapping from grid indices to world space.
///
/// `world = origin + index * spacing`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
  /// Samples per axis.
  pub size: usize,
  /// World position of index (0, 0, 0).
  pub origin: Vec3,
  /// World distance between adjacent samples.
  pub spacing: f32,
}

impl GridMapping {
  /// Unit spacing at the world origin.
  pub fn new(size: usize) -> Self {
    Self {
      size,
      origin: Vec3::ZERO,
      spacing: 1.0,
    }
  }

  /// Grid of `size` samples spanning `[-extent, extent]` on each axis.
  pub fn centered(size: usize, extent: f32) -> Self {
    let spacing = if size > 1 {
      2.0 * extent / (size - 1) as f32
    } else {
      0.0
    };
    Self {
      size,
      origin: Vec3::splat(-extent),
      spacing,
    }
  }

  pub fn with_origin(mut self, origin: Vec3) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_spacing(mut self, spacing: f32) -> Self {
    self.spacing = spacing;
    self
  }

  /// World position of a grid index.
  #[inline(always)]
  pub fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.origin + Vec3::new(x as f32, y as f32, z as f32) * self.spacing
  }

  /// Continuous grid coordinates of a world position.
  #[inline]
  pub fn grid_coords(&self, world: Vec3) -> Vec3 {
    if self.spacing == 0.0 {
      return Vec3::ZERO;
    }
    (world - self.origin) / self.spacing
  }

  /// World-space edge length of the whole grid.
  pub fn extent(&self) -> f32 {
    self.size.saturating_sub(1) as f32 * self.spacing
  }

  /// Total number of samples.
  pub fn sample_count(&self) -> usize {
    self.size * self.size * self.size
  }

  /// Linear sample index, X fastest then Y then Z.
  ///
  /// # Panics
  /// Debug-asserts that every index is below `size`.
  #[inline(always)]
  pub fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
    debug_assert!(
      x < self.size && y < self.size && z < self.size,
      "sample index ({x}, {y}, {z}) out of range for size {}",
      self.size
    );
    x + self.size * (y + self.size * z)
  }
}

/// Normalize or fall back to +Y for degenerate vectors.
#[inline]
pub(crate) fn normalize_or_up(v: Vec3) -> Vec3 {
  let len_sq = v.length_squared();
  if !(len_sq > 1e-12) {
    return Vec3::Y;
  }
  v * len_sq.sqrt().recip()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
