use super::*;

#[test]
fn test_all_below() {
  let values = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0];
  assert_eq!(build(&values, 0.0), 0b0000_0000);
}

#[test]
fn test_all_above() {
  let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
  assert_eq!(build(&values, 0.0), 0b1111_1111);
}

#[test]
fn test_bit_order_follows_corner_order() {
  let mut values = [-1.0; 8];
  values[6] = 1.0;
  assert_eq!(build(&values, 0.0), 64);

  let mut values = [-1.0; 8];
  values[0] = 1.0;
  assert_eq!(build(&values, 0.0), 1);
}

#[test]
fn test_checkerboard() {
  let values = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
  assert_eq!(build(&values, 0.0), 0b0101_0101);
}

#[test]
fn test_equal_to_iso_is_below() {
  let values = [0.5; 8];
  assert_eq!(build(&values, 0.5), 0);

  let mut values = [0.5; 8];
  values[3] = 0.500_001;
  assert_eq!(build(&values, 0.5), 1 << 3);
}

#[test]
fn test_nan_counts_as_below() {
  let mut values = [1.0; 8];
  values[2] = f32::NAN;
  assert_eq!(build(&values, 0.0), 0b1111_1011);
  assert!(has_nan(&values));
  assert!(!has_nan(&[0.0; 8]));
}

#[test]
fn test_nonzero_iso_level() {
  let values = [0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75];
  assert_eq!(build(&values, 0.9), 0b1111_0000);
}
