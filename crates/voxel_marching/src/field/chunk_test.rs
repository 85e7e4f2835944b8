use super::*;
use crate::field::{GridMapping, SampledField};

fn ramp_field(size: usize) -> SampledField {
  SampledField::from_fn(GridMapping::new(size), |p| p.x + 100.0 * p.y + 10_000.0 * p.z).unwrap()
}

#[test]
fn test_view_offsets_indices() {
  let field = ramp_field(9);
  let view = ChunkView::new(&field, [4, 0, 4], 5).unwrap();

  assert_eq!(view.size(), 5);
  assert_eq!(view.offset(), [4, 0, 4]);
  assert_eq!(view.value(0, 0, 0), field.value(4, 0, 4));
  assert_eq!(view.value(4, 3, 1), field.value(8, 3, 5));
  assert_eq!(view.world_position(1, 1, 1), field.world_position(5, 1, 5));
}

#[test]
fn test_view_rejects_out_of_bounds() {
  let field = ramp_field(9);

  assert!(ChunkView::new(&field, [4, 4, 4], 5).is_ok());
  assert_eq!(
    ChunkView::new(&field, [5, 0, 0], 5).err(),
    Some(FieldError::ChunkOutOfBounds {
      offset: [5, 0, 0],
      size: 5,
      field_size: 9
    })
  );
  assert_eq!(
    ChunkView::new(&field, [0, 0, 0], 1).err(),
    Some(FieldError::TooSmall { size: 1 })
  );
}

#[test]
fn test_tile_covers_every_cell_once() {
  let field = ramp_field(9);
  let chunks = ChunkView::tile(&field, 4).unwrap();

  assert_eq!(chunks.len(), 8);

  let mut covered = vec![0u32; 8 * 8 * 8];
  for chunk in &chunks {
    assert_eq!(chunk.size(), 5);
    let [ox, oy, oz] = chunk.offset();
    for z in 0..4 {
      for y in 0..4 {
        for x in 0..4 {
          covered[(ox + x) + 8 * ((oy + y) + 8 * (oz + z))] += 1;
        }
      }
    }
  }
  assert!(covered.iter().all(|&c| c == 1));
}

#[test]
fn test_tile_orders_z_outer_x_inner() {
  let field = ramp_field(5);
  let offsets: Vec<[usize; 3]> = ChunkView::tile(&field, 2)
    .unwrap()
    .iter()
    .map(|c| c.offset())
    .collect();

  assert_eq!(offsets[0], [0, 0, 0]);
  assert_eq!(offsets[1], [2, 0, 0]);
  assert_eq!(offsets[2], [0, 2, 0]);
  assert_eq!(offsets[4], [0, 0, 2]);
}

#[test]
fn test_tile_rejects_uneven_split() {
  let field = ramp_field(9);
  assert_eq!(
    ChunkView::tile(&field, 3).err(),
    Some(FieldError::ChunkTiling {
      cells: 8,
      chunk_cells: 3
    })
  );
  assert!(ChunkView::tile(&field, 0).is_err());
}
