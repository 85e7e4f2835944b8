//! Dense, owned sample grid.
//!
//! Holds `size³` floats laid out X fastest, then Y, then Z. Normals come from
//! central differences of the trilinear reconstruction, so they are smooth
//! between samples but only as accurate as the grid resolution.

use glam::Vec3;

use super::{normalize_or_up, FieldError, GridMapping, ScalarField};

#[derive(Clone, Debug, PartialEq)]
pub struct SampledField {
  mapping: GridMapping,
  samples: Vec<f32>,
}

impl SampledField {
  /// Wrap existing samples. `samples.len()` must equal `size³`.
  pub fn from_samples(mapping: GridMapping, samples: Vec<f32>) -> Result<Self, FieldError> {
    if mapping.size < 2 {
      return Err(FieldError::TooSmall { size: mapping.size });
    }
    let expected = mapping.sample_count();
    if samples.len() != expected {
      return Err(FieldError::SampleCount {
        expected,
        actual: samples.len(),
      });
    }
    Ok(Self { mapping, samples })
  }

  /// Grid filled with a single value.
  pub fn filled(mapping: GridMapping, value: f32) -> Result<Self, FieldError> {
    Self::from_samples(mapping, vec![value; mapping.sample_count()])
  }

  /// Sample a function of world position at every grid point.
  pub fn from_fn(mapping: GridMapping, f: impl Fn(Vec3) -> f32) -> Result<Self, FieldError> {
    if mapping.size < 2 {
      return Err(FieldError::TooSmall { size: mapping.size });
    }
    let size = mapping.size;
    let mut samples = Vec::with_capacity(mapping.sample_count());
    for z in 0..size {
      for y in 0..size {
        for x in 0..size {
          samples.push(f(mapping.world_position(x, y, z)));
        }
      }
    }
    Ok(Self { mapping, samples })
  }

  /// Snapshot another field's samples and mapping.
  ///
  /// Spacing is read along X only, so the source field must use the same
  /// spacing on all three axes. Anisotropic grids are not representable by
  /// [`GridMapping`].
  pub fn snapshot<F: ScalarField>(field: &F) -> Result<Self, FieldError> {
    let size = field.size();
    if size < 2 {
      return Err(FieldError::TooSmall { size });
    }
    let origin = field.world_position(0, 0, 0);
    let spacing = field.world_position(1, 0, 0).x - origin.x;
    let mapping = GridMapping::new(size)
      .with_origin(origin)
      .with_spacing(spacing);

    let mut samples = Vec::with_capacity(mapping.sample_count());
    for z in 0..size {
      for y in 0..size {
        for x in 0..size {
          samples.push(field.value(x, y, z));
        }
      }
    }
    Ok(Self { mapping, samples })
  }

  pub fn mapping(&self) -> &GridMapping {
    &self.mapping
  }

  pub fn samples(&self) -> &[f32] {
    &self.samples
  }

  /// Overwrite one sample.
  ///
  /// # Panics
  /// If any index is outside `0..size`.
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
    let size = self.mapping.size;
    assert!(
      x < size && y < size && z < size,
      "sample index ({x}, {y}, {z}) out of range for size {size}"
    );
    let idx = self.mapping.linear_index(x, y, z);
    self.samples[idx] = value;
  }

  #[inline(always)]
  fn at(&self, x: usize, y: usize, z: usize) -> f32 {
    self.samples[self.mapping.linear_index(x, y, z)]
  }

  /// Trilinear reconstruction at continuous grid coordinates, clamped to the
  /// grid.
  pub fn interpolate(&self, grid: Vec3) -> f32 {
    let max = (self.mapping.size - 1) as f32;
    let g = grid.clamp(Vec3::ZERO, Vec3::splat(max));

    // Base cell, kept one short of the far face so +1 stays in range
    let last_cell = self.mapping.size - 2;
    let x0 = (g.x.floor() as usize).min(last_cell);
    let y0 = (g.y.floor() as usize).min(last_cell);
    let z0 = (g.z.floor() as usize).min(last_cell);
    let t = g - Vec3::new(x0 as f32, y0 as f32, z0 as f32);

    let c000 = self.at(x0, y0, z0);
    let c100 = self.at(x0 + 1, y0, z0);
    let c010 = self.at(x0, y0 + 1, z0);
    let c110 = self.at(x0 + 1, y0 + 1, z0);
    let c001 = self.at(x0, y0, z0 + 1);
    let c101 = self.at(x0 + 1, y0, z0 + 1);
    let c011 = self.at(x0, y0 + 1, z0 + 1);
    let c111 = self.at(x0 + 1, y0 + 1, z0 + 1);

    let c00 = c000 + (c100 - c000) * t.x;
    let c10 = c010 + (c110 - c010) * t.x;
    let c01 = c001 + (c101 - c001) * t.x;
    let c11 = c011 + (c111 - c011) * t.x;

    let c0 = c00 + (c10 - c00) * t.y;
    let c1 = c01 + (c11 - c01) * t.y;

    c0 + (c1 - c0) * t.z
  }
}

impl ScalarField for SampledField {
  fn size(&self) -> usize {
    self.mapping.size
  }

  #[inline]
  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    self.at(x, y, z)
  }

  #[inline]
  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.mapping.world_position(x, y, z)
  }

  fn normal(&self, world: Vec3) -> Vec3 {
    const H: f32 = 0.5;

    let g = self.mapping.grid_coords(world);
    let dx = self.interpolate(g + Vec3::X * H) - self.interpolate(g - Vec3::X * H);
    let dy = self.interpolate(g + Vec3::Y * H) - self.interpolate(g - Vec3::Y * H);
    let dz = self.interpolate(g + Vec3::Z * H) - self.interpolate(g - Vec3::Z * H);

    // Normal points toward decreasing value
    normalize_or_up(-Vec3::new(dx, dy, dz))
  }
}

#[cfg(test)]
#[path = "sampled_test.rs"]
mod sampled_test;
