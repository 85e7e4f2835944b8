use super::*;
use crate::constants::MAX_TRIANGLES_PER_CELL;
use crate::edge_table::EDGE_TABLE;

#[test]
fn test_homogeneous_rows_are_empty() {
  assert_eq!(triangle_count_for(0), 0);
  assert_eq!(triangle_count_for(255), 0);
  assert_eq!(triangles(0).count(), 0);
}

#[test]
fn test_rows_are_sentinel_terminated() {
  for (cube_index, row) in TRI_TABLE.iter().enumerate() {
    let len = row.iter().position(|&e| e == TRI_SENTINEL).unwrap_or(row.len());
    assert_eq!(len % 3, 0, "Row {} has a partial triangle", cube_index);
    assert!(len < row.len(), "Row {} is missing its sentinel", cube_index);
    assert!(
      row[len..].iter().all(|&e| e == TRI_SENTINEL),
      "Row {} has data after the sentinel",
      cube_index
    );
  }
}

#[test]
fn test_edge_indices_in_range() {
  for row in &TRI_TABLE {
    for &edge in row {
      assert!(edge == TRI_SENTINEL || (0..12).contains(&edge));
    }
  }
}

#[test]
fn test_triangle_count_bounded() {
  for cube_index in 0..=255u8 {
    assert!(triangle_count_for(cube_index) <= MAX_TRIANGLES_PER_CELL);
    assert_eq!(triangles(cube_index).count(), triangle_count_for(cube_index));
  }
}

#[test]
fn test_rows_reference_exactly_the_crossed_edges() {
  for cube_index in 0..=255u8 {
    let mut used = 0u16;
    for tri in triangles(cube_index) {
      for edge in tri {
        used |= 1 << edge;
      }
    }
    assert_eq!(
      used, EDGE_TABLE[cube_index as usize],
      "Triangles for index {} don't match the edge table",
      cube_index
    );
  }
}

#[test]
fn test_single_corner_is_one_triangle() {
  for corner in 0..8 {
    assert_eq!(triangle_count_for(1 << corner), 1);
  }
}

#[test]
fn test_triangles_preserve_table_order() {
  let tris: Vec<[usize; 3]> = triangles(3).collect();
  assert_eq!(tris, vec![[1, 8, 3], [9, 8, 1]]);
}
