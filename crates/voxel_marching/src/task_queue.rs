//! Task queue for parallel meshing operations.
//!
//! Enqueue → Tick → Completions: requests accumulate until `tick`, which
//! meshes them all on rayon and parks the results until drained. For callers
//! that poll once per frame instead, [`BackgroundMesher`] runs a single
//! request on the rayon pool and hands the result back over a channel.

use crossbeam_channel::{self as channel, Receiver, TryRecvError};
use rayon::prelude::*;
use web_time::Instant;

use crate::field::ScalarField;
use crate::marching_cubes::MeshExtractor;
use crate::metrics::MeshingMetrics;
use crate::types::{ExtractionStats, ExtractorConfig, MeshOutput};

/// Request to mesh one field.
pub struct MeshRequest<F> {
  /// Unique identifier for this request
  pub id: u64,
  pub field: F,
  pub iso_level: f32,
}

/// Completed mesh result.
#[derive(Debug)]
pub struct MeshCompletion {
  /// Request ID this completion corresponds to
  pub id: u64,
  /// Generated mesh output
  pub output: MeshOutput,
  pub stats: ExtractionStats,
  /// Raw meshing time in microseconds
  pub mesh_time_us: u64,
}

fn run_request<F: ScalarField>(extractor: &mut MeshExtractor, request: MeshRequest<F>) -> MeshCompletion {
  let start = Instant::now();
  let output = extractor.generate(&request.field, request.iso_level).clone();
  let mesh_time_us = start.elapsed().as_micros() as u64;

  MeshCompletion {
    id: request.id,
    output,
    stats: extractor.last_stats(),
    mesh_time_us,
  }
}

/// Meshing stage that processes requests in parallel.
pub struct MeshingStage<F> {
  config: ExtractorConfig,
  /// Pending requests waiting to be processed
  pending: Vec<MeshRequest<F>>,
  /// Completed results ready to be collected
  completed: Vec<MeshCompletion>,
  next_id: u64,
  metrics: MeshingMetrics,
}

impl<F: ScalarField + Send> Default for MeshingStage<F> {
  fn default() -> Self {
    Self::new()
  }
}

impl<F: ScalarField + Send> MeshingStage<F> {
  pub fn new() -> Self {
    Self::with_config(ExtractorConfig::default())
  }

  pub fn with_config(config: ExtractorConfig) -> Self {
    Self {
      config,
      pending: Vec::new(),
      completed: Vec::new(),
      next_id: 0,
      metrics: MeshingMetrics::new(),
    }
  }

  /// Enqueue a field, returning the assigned ID.
  pub fn enqueue(&mut self, field: F, iso_level: f32) -> u64 {
    let id = self.next_id;
    self.next_id += 1;

    self.pending.push(MeshRequest {
      id,
      field,
      iso_level,
    });

    id
  }

  /// Process pending requests in parallel and move completions to output.
  /// Returns the number of requests processed this tick.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "task_queue::tick"))]
  pub fn tick(&mut self) -> usize {
    if self.pending.is_empty() {
      return 0;
    }

    let requests = std::mem::take(&mut self.pending);
    let count = requests.len();
    let config = &self.config;

    let completions: Vec<MeshCompletion> = requests
      .into_par_iter()
      .map_init(
        || MeshExtractor::with_config(config.clone()),
        |extractor, request| run_request(extractor, request),
      )
      .collect();

    for completion in &completions {
      self.metrics.record_mesh(completion.mesh_time_us, &completion.stats);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count, "meshing stage tick");

    self.completed.extend(completions);
    count
  }

  /// Take all completed meshes, in enqueue order.
  pub fn drain_completions(&mut self) -> Vec<MeshCompletion> {
    std::mem::take(&mut self.completed)
  }

  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  /// Number of completed results waiting to be drained.
  pub fn completed_count(&self) -> usize {
    self.completed.len()
  }

  /// True when no work remains.
  pub fn is_idle(&self) -> bool {
    self.pending.is_empty() && self.completed.is_empty()
  }

  pub fn metrics(&self) -> &MeshingMetrics {
    &self.metrics
  }
}

/// Mesh one field on rayon's thread pool (non-blocking).
///
/// The completion arrives on the returned channel. Dropping the receiver
/// cancels delivery; the extraction itself still runs to the end.
pub fn spawn_background<F>(
  id: u64,
  field: F,
  iso_level: f32,
  config: ExtractorConfig,
) -> Receiver<MeshCompletion>
where
  F: ScalarField + Send + 'static,
{
  let (sender, receiver) = channel::bounded(1);

  rayon::spawn(move || {
    let mut extractor = MeshExtractor::with_config(config);
    let completion = run_request(
      &mut extractor,
      MeshRequest {
        id,
        field,
        iso_level,
      },
    );
    // Receiver dropped = cancelled
    let _ = sender.send(completion);
  });

  receiver
}

/// Non-blocking single-slot mesher for per-frame polling.
#[derive(Default)]
pub struct BackgroundMesher {
  config: ExtractorConfig,
  receiver: Option<Receiver<MeshCompletion>>,
  next_id: u64,
}

impl BackgroundMesher {
  pub fn new(config: ExtractorConfig) -> Self {
    Self {
      config,
      receiver: None,
      next_id: 0,
    }
  }

  /// Check if a task is running.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Start meshing `field`.
  ///
  /// Returns the request ID, or `None` if a request is already running.
  pub fn start<F>(&mut self, field: F, iso_level: f32) -> Option<u64>
  where
    F: ScalarField + Send + 'static,
  {
    if self.is_busy() {
      return None;
    }

    let id = self.next_id;
    self.next_id += 1;
    self.receiver = Some(spawn_background(id, field, iso_level, self.config.clone()));
    Some(id)
  }

  /// Poll for the result (non-blocking).
  ///
  /// Returns `Some(completion)` when done, `None` if still running or idle.
  pub fn poll(&mut self) -> Option<MeshCompletion> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(completion) => {
        self.receiver = None;
        Some(completion)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        None
      }
    }
  }

  /// Block until the running request finishes.
  pub fn wait(&mut self) -> Option<MeshCompletion> {
    let receiver = self.receiver.take()?;
    receiver.recv().ok()
  }

  /// Drop the pending result.
  pub fn cancel(&mut self) {
    self.receiver = None;
  }
}

#[cfg(test)]
#[path = "task_queue_test.rs"]
mod task_queue_test;
