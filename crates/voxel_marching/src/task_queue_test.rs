use super::*;
use crate::field::{ConstantField, GridMapping, SphereField};

fn make_sphere(radius: f32) -> SphereField {
  SphereField::new(GridMapping::centered(24, 2.0), radius)
}

#[test]
fn test_single_request() {
  let mut stage = MeshingStage::new();

  let id = stage.enqueue(make_sphere(1.5), 0.0);
  assert_eq!(id, 0);
  assert_eq!(stage.pending_count(), 1);

  let processed = stage.tick();
  assert_eq!(processed, 1);
  assert_eq!(stage.pending_count(), 0);
  assert_eq!(stage.completed_count(), 1);

  let completions = stage.drain_completions();
  assert_eq!(completions.len(), 1);
  assert_eq!(completions[0].id, 0);
  assert!(!completions[0].output.vertices.is_empty());
  assert_eq!(
    completions[0].stats.triangles as usize,
    completions[0].output.triangle_count()
  );
  assert!(stage.is_idle());
}

#[test]
fn test_multiple_requests() {
  let mut stage = MeshingStage::new();

  for radius in [0.5, 1.0, 1.5, 1.75] {
    stage.enqueue(make_sphere(radius), 0.0);
  }
  assert_eq!(stage.pending_count(), 4);

  let processed = stage.tick();
  assert_eq!(processed, 4);
  assert_eq!(stage.completed_count(), 4);

  let completions = stage.drain_completions();
  let ids: Vec<u64> = completions.iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![0, 1, 2, 3]);

  // Bigger spheres, more triangles
  let counts: Vec<usize> = completions.iter().map(|c| c.output.triangle_count()).collect();
  assert!(counts.windows(2).all(|w| w[0] < w[1]), "{counts:?}");
}

#[test]
fn test_completions_accumulate_across_ticks() {
  let mut stage = MeshingStage::new();

  stage.enqueue(make_sphere(1.0), 0.0);
  stage.tick();
  stage.enqueue(make_sphere(1.2), 0.0);
  stage.tick();

  assert_eq!(stage.completed_count(), 2);
  let ids: Vec<u64> = stage.drain_completions().iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![0, 1]);
}

#[test]
fn test_empty_tick() {
  let mut stage: MeshingStage<SphereField> = MeshingStage::default();
  assert!(stage.is_idle());

  let processed = stage.tick();
  assert_eq!(processed, 0);
  assert!(stage.is_idle());
}

#[test]
fn test_stage_with_borrowed_fields() {
  let fields = [make_sphere(1.0), make_sphere(1.5)];
  let mut stage = MeshingStage::new();
  for field in &fields {
    stage.enqueue(field, 0.0);
  }

  stage.tick();
  assert_eq!(stage.drain_completions().len(), 2);
}

#[test]
fn test_empty_field_completes_with_empty_mesh() {
  let mut stage = MeshingStage::new();
  stage.enqueue(ConstantField::new(GridMapping::new(16), -1.0), 0.0);
  stage.tick();

  let completions = stage.drain_completions();
  assert!(completions[0].output.is_empty());
  assert_eq!(completions[0].stats.cells_skipped, 15 * 15 * 15);
}

#[test]
fn test_spawn_background_delivers() {
  let receiver = spawn_background(7, make_sphere(1.5), 0.0, ExtractorConfig::default());
  let completion = receiver.recv().unwrap();

  assert_eq!(completion.id, 7);
  assert!(!completion.output.is_empty());
}

#[test]
fn test_background_mesher_single_slot() {
  let mut mesher = BackgroundMesher::default();
  assert!(!mesher.is_busy());
  assert!(mesher.poll().is_none());

  let id = mesher.start(make_sphere(1.5), 0.0);
  assert_eq!(id, Some(0));
  assert!(mesher.is_busy());

  // Busy until the result is collected
  assert_eq!(mesher.start(make_sphere(1.0), 0.0), None);

  let completion = mesher.wait().unwrap();
  assert_eq!(completion.id, 0);
  assert!(!completion.output.is_empty());
  assert!(!mesher.is_busy());

  assert_eq!(mesher.start(make_sphere(1.0), 0.0), Some(1));
  mesher.cancel();
  assert!(!mesher.is_busy());
  assert!(mesher.poll().is_none());
}

#[test]
fn test_background_mesher_poll_eventually_completes() {
  let mut mesher = BackgroundMesher::new(ExtractorConfig::default());
  mesher.start(make_sphere(1.2), 0.0);

  let completion = loop {
    if let Some(completion) = mesher.poll() {
      break completion;
    }
    std::thread::yield_now();
  };
  assert_eq!(completion.id, 0);
  assert!(!mesher.is_busy());
}
