//! Cube topology constants for marching cubes.
//!
//! The corner order below is the convention `EDGE_TABLE` and `TRI_TABLE` were
//! generated against. Changing it silently produces wrong topology.
//!
//! # Cube Topology
//!
//! ```text
//!        7──────6          Corners (grid offsets x,y,z):
//!       /│     /│            0=(0,0,0)  1=(1,0,0)  2=(1,0,1)  3=(0,0,1)
//!      4─┼────5 │            4=(0,1,0)  5=(1,1,0)  6=(1,1,1)  7=(0,1,1)
//!      │ 3────┼─2
//!      │/     │/           +Y
//!      0──────1             │  +Z
//!                           │ /
//!                           └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! Bottom ring (y=0):   0:[0,1]  1:[1,2]  2:[2,3]  3:[3,0]
//! Top ring    (y=1):   4:[4,5]  5:[5,6]  6:[6,7]  7:[7,4]
//! Verticals:           8:[0,4]  9:[1,5] 10:[2,6] 11:[3,7]
//! ```

/// Grid offsets of the 8 cube corners, in canonical order.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0], // 0
  [1, 0, 0], // 1
  [1, 0, 1], // 2
  [0, 0, 1], // 3
  [0, 1, 0], // 4
  [1, 1, 0], // 5
  [1, 1, 1], // 6
  [0, 1, 1], // 7
];

/// Edge endpoint corner indices.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1], // Edge 0:  bottom, X axis at z=0
  [1, 2], // Edge 1:  bottom, Z axis at x=1
  [2, 3], // Edge 2:  bottom, X axis at z=1
  [3, 0], // Edge 3:  bottom, Z axis at x=0
  [4, 5], // Edge 4:  top, X axis at z=0
  [5, 6], // Edge 5:  top, Z axis at x=1
  [6, 7], // Edge 6:  top, X axis at z=1
  [7, 4], // Edge 7:  top, Z axis at x=0
  [0, 4], // Edge 8:  Y axis at (0,0)
  [1, 5], // Edge 9:  Y axis at (1,0)
  [2, 6], // Edge 10: Y axis at (1,1)
  [3, 7], // Edge 11: Y axis at (0,1)
];

/// Below this corner value difference an edge is treated as flat and the
/// crossing is placed at its midpoint.
pub const DEGENERATE_EDGE_EPSILON: f32 = 1e-8;

/// Upper bound of triangles any single cube configuration produces.
pub const MAX_TRIANGLES_PER_CELL: usize = 5;

/// Floats per vertex in the flat output buffers.
pub const FLOATS_PER_VERTEX: usize = 3;

/// Floats per triangle in the flat output buffers (3 vertices × xyz).
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

/// Output floats reserved per cell when pre-sizing the output buffers.
pub const RESERVE_FLOATS_PER_CELL: usize = 15;

/// Number of cells in a field with `size` samples per axis.
#[inline]
pub const fn cell_count(size: usize) -> usize {
  if size < 2 {
    0
  } else {
    let cells = size - 1;
    cells * cells * cells
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
