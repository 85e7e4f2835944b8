//! Extraction statistics gathered across many meshing runs.
//!
//! Recording is compiled in only with the `metrics` feature and can be
//! switched off at runtime through [`COLLECT_METRICS`]. With the feature off,
//! [`MeshingMetrics::record_mesh`] returns immediately.
//!
//! ```ignore
//! use std::sync::atomic::Ordering;
//! use voxel_marching::metrics::{MeshingMetrics, COLLECT_METRICS};
//!
//! let mut metrics = MeshingMetrics::new();
//! metrics.record_mesh(result.timing_us, &result.stats);
//!
//! // Pause collection during a warmup pass
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::types::ExtractionStats;

/// Samples kept per window unless configured otherwise.
pub const DEFAULT_WINDOW: usize = 128;

/// Global switch for [`MeshingMetrics::record_mesh`].
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// True when the `metrics` feature is compiled in and [`COLLECT_METRICS`] is set.
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Bounded window over the latest `u64` samples with a running total.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<u64>,
    limit: usize,
    total: u64,
}

impl SampleWindow {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(limit),
            limit,
            total: 0,
        }
    }

    /// Append a sample; the oldest one falls out once the window is full.
    pub fn record(&mut self, sample: u64) {
        if self.limit == 0 {
            return;
        }
        if self.samples.len() == self.limit {
            if let Some(evicted) = self.samples.pop_front() {
                self.total -= evicted;
            }
        }
        self.samples.push_back(sample);
        self.total += sample;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.total = 0;
    }

    /// Sum of the samples currently in the window.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn latest(&self) -> Option<u64> {
        self.samples.back().copied()
    }

    /// Mean of the window, 0 when empty.
    pub fn mean(&self) -> f64 {
        match self.samples.len() {
            0 => 0.0,
            n => self.total as f64 / n as f64,
        }
    }

    pub fn peak(&self) -> Option<u64> {
        self.samples.iter().copied().max()
    }

    /// Middle sample (upper median for even counts).
    pub fn median(&self) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }
        let mut sorted: Vec<u64> = self.samples.iter().copied().collect();
        sorted.sort_unstable();
        Some(sorted[sorted.len() / 2])
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::with_limit(DEFAULT_WINDOW)
    }
}

/// Timings and cell counters accumulated across extractions.
#[derive(Debug, Clone, Default)]
pub struct MeshingMetrics {
    /// Recent extraction times in microseconds.
    pub mesh_timings: SampleWindow,
    /// Recent triangle counts per extraction.
    pub triangle_counts: SampleWindow,

    // Session totals, untouched by reset()
    pub total_meshes: u64,
    pub total_triangles: u64,
    pub total_cells_visited: u64,
    pub total_active_cells: u64,
    pub total_nan_skipped: u64,
}

impl MeshingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the recent windows, keeping session totals.
    pub fn reset(&mut self) {
        self.mesh_timings.clear();
        self.triangle_counts.clear();
    }

    /// Fold one extraction into the windows and totals.
    pub fn record_mesh(&mut self, timing_us: u64, stats: &ExtractionStats) {
        if !is_enabled() {
            return;
        }

        self.mesh_timings.record(timing_us);
        self.triangle_counts.record(stats.triangles);

        self.total_meshes += 1;
        self.total_triangles += stats.triangles;
        self.total_cells_visited += stats.cells_visited;
        self.total_active_cells += stats.active_cells();
        self.total_nan_skipped += stats.cells_nan_skipped;
    }

    pub fn last_mesh_us(&self) -> Option<u64> {
        self.mesh_timings.latest()
    }

    pub fn avg_mesh_timing_us(&self) -> f64 {
        self.mesh_timings.mean()
    }

    /// Slowest extraction still in the timing window.
    pub fn peak_mesh_timing_us(&self) -> Option<u64> {
        self.mesh_timings.peak()
    }

    pub fn avg_triangles(&self) -> f64 {
        self.triangle_counts.mean()
    }

    /// Fraction of visited cells that produced geometry.
    pub fn active_cell_ratio(&self) -> f64 {
        if self.total_cells_visited == 0 {
            0.0
        } else {
            self.total_active_cells as f64 / self.total_cells_visited as f64
        }
    }
}
