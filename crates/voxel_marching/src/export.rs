//! Wavefront OBJ export.
//!
//! The triangle soup maps onto OBJ directly: one `v`/`vn` pair per emitted
//! vertex, one `f` per triangle referencing three consecutive vertices.
//!
//! ```text
//! # 2 triangles
//! v  x y z        ┐
//! vn x y z        │ × 6
//! ...             ┘
//! f 1//1 2//2 3//3
//! f 4//4 5//5 6//6
//! ```

use std::io::{self, Write};

use crate::types::MeshOutput;

/// Write `mesh` as OBJ text. Indices are 1-based.
pub fn write_obj<W: Write>(mesh: &MeshOutput, mut out: W) -> io::Result<()> {
  writeln!(out, "# {} triangles", mesh.triangle_count())?;

  for i in 0..mesh.vertex_count() {
    let [x, y, z] = mesh.position(i);
    writeln!(out, "v {x} {y} {z}")?;
  }
  for i in 0..mesh.vertex_count() {
    let [x, y, z] = mesh.normal(i);
    writeln!(out, "vn {x} {y} {z}")?;
  }

  for tri in 0..mesh.triangle_count() {
    let a = tri * 3 + 1;
    let (b, c) = (a + 1, a + 2);
    writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
  }

  out.flush()
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
