//! Parallel meshing on top of [`MeshExtractor`].
//!
//! Thin wrappers that:
//! - Time each extraction with `web_time::Instant`
//! - Fan independent fields, or chunks of one large field, out over rayon
//! - Keep results in input order for deterministic output
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ Meshing                                                                 │
//! │                                                                         │
//! │  mesh_batch(&[F])         mesh_chunked(&F, chunk_cells)                 │
//! │        │                        │                                       │
//! │        │                  ChunkView::tile → [ChunkView; k³]             │
//! │        ▼                        ▼                                       │
//! │  ┌─────────────────────────────────────────────────────────┐            │
//! │  │ par_iter().map_init(MeshExtractor, generate)            │            │
//! │  │ one extractor per rayon split, scratch reused           │            │
//! │  └─────────────────────────────────────────────────────────┘            │
//! │        │                        │                                       │
//! │        ▼                        ▼                                       │
//! │  Vec<MeshResult>          Vec<ChunkMesh { offset, result }>             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rayon::prelude::*;
use web_time::Instant;

use crate::field::{ChunkView, FieldError, ScalarField};
use crate::marching_cubes::MeshExtractor;
use crate::types::{ExtractionStats, ExtractorConfig, MeshOutput};

/// One timed extraction.
#[derive(Clone, Debug)]
pub struct MeshResult {
  /// Generated mesh (may be empty if the field has no crossing).
  pub output: MeshOutput,

  /// Extraction counters.
  pub stats: ExtractionStats,

  /// Time taken to mesh in microseconds.
  pub timing_us: u64,
}

/// Mesh of one chunk of a larger field.
#[derive(Clone, Debug)]
pub struct ChunkMesh {
  /// Sample offset of the chunk in the parent field.
  pub offset: [usize; 3],

  pub result: MeshResult,
}

/// Run one extraction and copy the result out, keeping the extractor's
/// buffers for the next call.
fn mesh_with<F: ScalarField + ?Sized>(
  extractor: &mut MeshExtractor,
  field: &F,
  iso_level: f32,
) -> MeshResult {
  let start = Instant::now();
  let output = extractor.generate(field, iso_level).clone();
  let timing_us = start.elapsed().as_micros() as u64;

  MeshResult {
    output,
    stats: extractor.last_stats(),
    timing_us,
  }
}

/// Mesh a single field.
pub fn mesh_field<F: ScalarField + ?Sized>(
  field: &F,
  iso_level: f32,
  config: &ExtractorConfig,
) -> MeshResult {
  let mut extractor = MeshExtractor::with_config(config.clone());

  let start = Instant::now();
  extractor.generate(field, iso_level);
  let timing_us = start.elapsed().as_micros() as u64;

  MeshResult {
    stats: extractor.last_stats(),
    output: extractor.take_output(),
    timing_us,
  }
}

/// Mesh independent fields in parallel.
///
/// Results maintain the same order as inputs.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "meshing::mesh_batch"))]
pub fn mesh_batch<F: ScalarField + Sync>(
  fields: &[F],
  iso_level: f32,
  config: &ExtractorConfig,
) -> Vec<MeshResult> {
  if fields.is_empty() {
    return Vec::new();
  }

  fields
    .par_iter()
    .map_init(
      || MeshExtractor::with_config(config.clone()),
      |extractor, field| mesh_with(extractor, field, iso_level),
    )
    .collect()
}

/// Split a field into chunks of `chunk_cells` cells per axis and mesh them
/// in parallel.
///
/// Chunks share their boundary samples, so every cell of the field is meshed
/// exactly once and the union of the chunk meshes equals the mesh of the
/// whole field. Chunks come back ordered Z outer, Y middle, X inner.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "meshing::mesh_chunked"))]
pub fn mesh_chunked<F: ScalarField + Sync + ?Sized>(
  field: &F,
  chunk_cells: usize,
  iso_level: f32,
  config: &ExtractorConfig,
) -> Result<Vec<ChunkMesh>, FieldError> {
  let chunks = ChunkView::tile(field, chunk_cells)?;

  #[cfg(feature = "tracing")]
  let _span = tracing::info_span!("mesh_chunks", count = chunks.len()).entered();

  let meshes = chunks
    .par_iter()
    .map_init(
      || MeshExtractor::with_config(config.clone()),
      |extractor, chunk| ChunkMesh {
        offset: chunk.offset(),
        result: mesh_with(extractor, chunk, iso_level),
      },
    )
    .collect();

  Ok(meshes)
}

/// Concatenate chunk meshes in order into one triangle soup.
pub fn merge_chunks(chunks: &[ChunkMesh]) -> MeshOutput {
  let floats = chunks.iter().map(|c| c.result.output.vertices.len()).sum();
  let mut merged = MeshOutput::with_capacity(floats);
  for chunk in chunks {
    merged.append(&chunk.result.output);
  }
  merged
}

#[cfg(test)]
#[path = "meshing_test.rs"]
mod meshing_test;
