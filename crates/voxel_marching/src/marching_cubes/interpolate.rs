//! Edge crossing interpolation.

use glam::Vec3;

use crate::constants::DEGENERATE_EDGE_EPSILON;

/// Fraction along the edge from `va` to `vb` where the field crosses
/// `iso_level`.
///
/// Clamped to `[0, 1]`. Returns the midpoint when the two values are closer
/// than [`DEGENERATE_EDGE_EPSILON`]. NaN inputs propagate.
#[inline]
pub fn interpolation_factor(va: f32, vb: f32, iso_level: f32) -> f32 {
  let delta = vb - va;
  if delta.abs() < DEGENERATE_EDGE_EPSILON {
    return 0.5;
  }
  ((iso_level - va) / delta).clamp(0.0, 1.0)
}

/// World position of the iso crossing between two corners.
#[inline]
pub fn interpolate_edge(pa: Vec3, pb: Vec3, va: f32, vb: f32, iso_level: f32) -> Vec3 {
  pa.lerp(pb, interpolation_factor(va, vb, iso_level))
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
