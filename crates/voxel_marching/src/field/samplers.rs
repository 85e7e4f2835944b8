//! Analytic scalar fields.
//!
//! Deterministic mathematical shapes that are easy to verify. Each evaluates
//! its function at the world position of a grid index and supplies the exact
//! normal, so meshes from these fields carry analytic shading normals.

use glam::Vec3;

use super::{normalize_or_up, GridMapping, ScalarField};

/// Sphere field: `1 - |p - center| / radius`.
///
/// Positive inside, zero on the sphere, negative outside. Meshing at
/// `iso_level = 0.0` yields the sphere itself.
#[derive(Clone, Debug)]
pub struct SphereField {
  pub mapping: GridMapping,
  /// Center in world coordinates
  pub center: Vec3,
  pub radius: f32,
}

impl SphereField {
  pub fn new(mapping: GridMapping, radius: f32) -> Self {
    Self {
      mapping,
      center: Vec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }

  /// Field value at a world position.
  #[inline]
  pub fn evaluate(&self, p: Vec3) -> f32 {
    1.0 - (p - self.center).length() / self.radius
  }
}

impl ScalarField for SphereField {
  fn size(&self) -> usize {
    self.mapping.size
  }

  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    self.evaluate(self.mapping.world_position(x, y, z))
  }

  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.mapping.world_position(x, y, z)
  }

  fn normal(&self, world: Vec3) -> Vec3 {
    normalize_or_up(world - self.center)
  }
}

/// Half-space field: `height - dot(normal, p)`.
///
/// Positive below the plane. With the default `+Y` normal this is a ground
/// plane at `y = height`.
#[derive(Clone, Debug)]
pub struct PlaneField {
  pub mapping: GridMapping,
  /// Unit plane normal
  pub plane_normal: Vec3,
  /// Signed distance of the plane from the origin along the normal
  pub height: f32,
}

impl PlaneField {
  pub fn new(mapping: GridMapping, height: f32) -> Self {
    Self {
      mapping,
      plane_normal: Vec3::Y,
      height,
    }
  }

  /// Tilt the plane; the normal is normalized.
  pub fn with_normal(mut self, normal: Vec3) -> Self {
    self.plane_normal = normalize_or_up(normal);
    self
  }

  #[inline]
  pub fn evaluate(&self, p: Vec3) -> f32 {
    self.height - self.plane_normal.dot(p)
  }
}

impl ScalarField for PlaneField {
  fn size(&self) -> usize {
    self.mapping.size
  }

  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    self.evaluate(self.mapping.world_position(x, y, z))
  }

  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.mapping.world_position(x, y, z)
  }

  fn normal(&self, _world: Vec3) -> Vec3 {
    self.plane_normal
  }
}

/// A single metaball influence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metaball {
  /// Center position in world coordinates
  pub center: Vec3,
  /// Radius of influence
  pub radius: f32,
  /// Strength of the influence (typically 1.0)
  pub strength: f32,
}

impl Metaball {
  /// Inside this fraction of the radius the falloff is capped.
  const CORE_FRACTION_SQ: f32 = 0.01;

  /// Contribution `strength * r² / d²`, capped near the center.
  #[inline]
  fn influence(&self, p: Vec3) -> f32 {
    let r_sq = self.radius * self.radius;
    let dist_sq = (p - self.center).length_squared();
    if dist_sq < r_sq * Self::CORE_FRACTION_SQ {
      self.strength / Self::CORE_FRACTION_SQ
    } else {
      self.strength * r_sq / dist_sq
    }
  }

  /// Negative gradient of the influence (points away from the center).
  #[inline]
  fn falloff_direction(&self, p: Vec3) -> Vec3 {
    let r_sq = self.radius * self.radius;
    let d = p - self.center;
    let dist_sq = d.length_squared();
    if dist_sq < r_sq * Self::CORE_FRACTION_SQ {
      return Vec3::ZERO;
    }
    d * (2.0 * self.strength * r_sq / (dist_sq * dist_sq))
  }
}

/// Metaball (blobby) field.
///
/// Sum of `strength * r² / d²` over all balls. The surface sits where the
/// sum equals the threshold, so mesh with `iso_level = threshold`.
#[derive(Clone, Debug)]
pub struct MetaballsField {
  pub mapping: GridMapping,
  pub balls: Vec<Metaball>,
  /// Suggested iso level (default: 1.0)
  pub threshold: f32,
}

impl MetaballsField {
  pub fn new(mapping: GridMapping, balls: Vec<Metaball>) -> Self {
    Self {
      mapping,
      balls,
      threshold: 1.0,
    }
  }

  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }

  /// Scatter `count` balls within `[-extent, extent]³` from a seed.
  pub fn random(mapping: GridMapping, seed: u32, count: usize, extent: f32) -> Self {
    let mut rng = XorShift32::new(seed);
    let balls = (0..count)
      .map(|_| {
        let x = (rng.next_f32() * 2.0 - 1.0) * extent;
        let y = (rng.next_f32() * 2.0 - 1.0) * extent;
        let z = (rng.next_f32() * 2.0 - 1.0) * extent;

        // Radius in [extent * 0.1, extent * 0.4]
        let radius = extent * (0.1 + rng.next_f32() * 0.3);

        Metaball {
          center: Vec3::new(x, y, z),
          radius,
          strength: 1.0,
        }
      })
      .collect();

    Self::new(mapping, balls)
  }

  #[inline]
  pub fn evaluate(&self, p: Vec3) -> f32 {
    self.balls.iter().map(|ball| ball.influence(p)).sum()
  }
}

impl ScalarField for MetaballsField {
  fn size(&self) -> usize {
    self.mapping.size
  }

  fn value(&self, x: usize, y: usize, z: usize) -> f32 {
    self.evaluate(self.mapping.world_position(x, y, z))
  }

  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.mapping.world_position(x, y, z)
  }

  fn normal(&self, world: Vec3) -> Vec3 {
    let direction = self
      .balls
      .iter()
      .fold(Vec3::ZERO, |acc, ball| acc + ball.falloff_direction(world));
    normalize_or_up(direction)
  }
}

/// Field with the same value everywhere.
#[derive(Clone, Debug)]
pub struct ConstantField {
  pub mapping: GridMapping,
  pub value: f32,
}

impl ConstantField {
  pub fn new(mapping: GridMapping, value: f32) -> Self {
    Self { mapping, value }
  }
}

impl ScalarField for ConstantField {
  fn size(&self) -> usize {
    self.mapping.size
  }

  fn value(&self, _x: usize, _y: usize, _z: usize) -> f32 {
    self.value
  }

  fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
    self.mapping.world_position(x, y, z)
  }

  fn normal(&self, _world: Vec3) -> Vec3 {
    Vec3::Y
  }
}

/// Simple xorshift32 PRNG for deterministic random generation.
struct XorShift32 {
  state: u32,
}

impl XorShift32 {
  fn new(seed: u32) -> Self {
    // Ensure non-zero state
    Self {
      state: if seed == 0 { 1 } else { seed },
    }
  }

  fn next(&mut self) -> u32 {
    let mut x = self.state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    self.state = x;
    x
  }

  fn next_f32(&mut self) -> f32 {
    (self.next() as f64 / u32::MAX as f64) as f32
  }
}

#[cfg(test)]
#[path = "samplers_test.rs"]
mod samplers_test;
