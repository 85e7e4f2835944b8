//! Read-only chunk windows into a larger field.
//!
//! ```text
//!  field samples:  0   1   2   3   4   5   6   7   8
//!                  ├───────────────┤               chunk 0: offset 0, size 5
//!                                  ├───────────────┤ chunk 1: offset 4, size 5
//!                                  ▲
//!                       shared boundary sample
//! ```
//!
//! Adjacent chunks share their boundary samples, so every cell of the parent
//! field belongs to exactly one chunk.

use glam::Vec3;

use super::{FieldError, ScalarField};

/// `size³` window of a parent field starting at a sample offset.
pub struct ChunkView<'a, F: ScalarField + ?Sized> {
  field: &'a F,
  offset: [usize; 3],
  size: usize,
}

impl<'a, F: ScalarField + ?Sized> ChunkView<'a, F> {
  pub fn new(field: &'a F, offset: [usize; 3], size: usize) -> Result<Self, FieldError> {
    if size < 2 {
      return Err(FieldError::TooSmall { size });
    }
    let field_size = field.size();
    if offset.iter().any(|&o| o + size > field_size) {
      return Err(FieldError::ChunkOutOfBounds {
        offset,
        size,
        field_size,
      });
    }
    Ok(Self {
      field,
      offset,
      size,
    })
  }

  /// Sample offset of this chunk in the parent field.
  pub fn offset(&self) -> [usize; 3] {
    self.offset
  }

  /// Split a field into cubic chunks of `chunk_cells` cells per axis.
  ///
  /// Chunks are ordered Z outer, Y middle, X inner, matching cell visitation
  /// order. The field's cell count per axis must be a multiple of
  /// `chunk_cells`.
  pub fn tile(field: &'a F, chunk_cells: usize) -> Result<Vec<Self>, FieldError> {
    let field_size = field.size();
    if field_size < 2 {
      return Err(FieldError::TooSmall { size: field_size });
    }
    let cells = field_size - 1;
    if chunk_cells == 0 || cells % chunk_cells != 0 {
      return Err(FieldError::ChunkTiling { cells, chunk_cells });
    }

    let per_axis = cells / chunk_cells;
    let mut chunks = Vec::with_capacity(per_axis * per_axis * per_axis);

    for cz in 0..per_axis {
      for cy in 0..per_axis {
        for cx in 0..per_axis {
          let offset = [cx * chunk_cells, cy * chunk_cells, cz * chunk_cells];
          chunks.push(Self {
            field,
            offset,
            size: chunk_cells + 1,
          });
        }
      }
    }

    Ok(chunks)
  }
}

impl<F: ScalarField + ?Sized> Clone for ChunkView<'_, F> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<F: ScalarField + ?Sized> Copy for ChunkView<'_, F> {}

impl<F: ScalarField + ?Sized> ScalarField for ChunkView<'_, F> {
  #[inline]
  fn size(&self) -> usize {
    self.size
  }

  #[inline]
  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    let [ox, oy, oz] = self.offset;
    self.field.value(ox + x, oy + y, oz + z)
  }

  #[inline]
  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    let [ox, oy, oz] = self.offset;
    self.field.world_position(ox + x, oy + y, oz + z)
  }

  #[inline]
  fn normal(&self, world: Vec3) -> Vec3 {
    self.field.normal(world)
  }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
