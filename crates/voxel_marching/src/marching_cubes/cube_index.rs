//! Cube index classification.
//!
//! The cube index is an 8-bit value where bit `i` is set when corner `i` (in
//! canonical corner order) lies strictly above the iso level.

/// Build the cube index from 8 corner values.
///
/// A corner exactly equal to the iso level counts as below. NaN compares
/// false and therefore also counts as below.
#[inline]
pub fn build(values: &[f32; 8], iso_level: f32) -> u8 {
  let mut index = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value > iso_level {
      index |= 1 << i;
    }
  }
  index
}

/// True if any corner value is NaN.
#[inline]
pub fn has_nan(values: &[f32; 8]) -> bool {
  values.iter().any(|v| v.is_nan())
}

#[cfg(test)]
#[path = "cube_index_test.rs"]
mod cube_index_test;
