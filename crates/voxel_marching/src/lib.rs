//! voxel_marching - Marching cubes isosurface extraction
//!
//! Turns an N³ sampled scalar field into a triangle soup approximating the
//! surface where the field equals an iso level. Each cell is triangulated
//! from the classic 256-entry edge and triangle tables; the output is a pair
//! of flat `f32` buffers (positions and per-vertex normals, 9 floats per
//! triangle) ready to hand to a renderer.
//!
//! # Features
//!
//! - **Reusable extractor**: scratch and output buffers survive across
//!   calls, nothing allocates per cell
//! - **Pluggable fields**: anything implementing [`ScalarField`], with
//!   analytic samplers (sphere, plane, metaballs) and a dense
//!   [`SampledField`]
//! - **Parallel meshing**: batches of fields or chunks of one large field
//!   fanned out over rayon
//! - **OBJ export** for inspecting results in external tools
//!
//! # Example
//!
//! ```
//! use voxel_marching::{GridMapping, MeshExtractor, MetaballsField};
//!
//! let mapping = GridMapping::centered(32, 2.0);
//! let field = MetaballsField::random(mapping, 1, 5, 1.5);
//!
//! let mut extractor = MeshExtractor::new();
//! extractor.generate(&field, field.threshold);
//!
//! println!(
//!   "Generated {} triangles ({} floats)",
//!   extractor.triangle_count(),
//!   extractor.vertices().len()
//! );
//! ```

pub mod constants;
pub mod edge_table;
pub mod tri_table;
pub mod types;

// Re-export commonly used items
pub use constants::{cell_count, CORNER_OFFSETS, EDGE_CORNERS, FLOATS_PER_TRIANGLE};
pub use edge_table::EDGE_TABLE;
pub use tri_table::TRI_TABLE;
pub use types::{ExtractionStats, ExtractorConfig, MeshOutput, MinMaxAABB, NanPolicy};

// Scalar field collaborators
pub mod field;
pub use field::{
  ChunkView, ConstantField, FieldError, GridMapping, Metaball, MetaballsField, PlaneField,
  SampledField, ScalarField, SphereField,
};

// Marching cubes extractor
pub mod marching_cubes;
pub use marching_cubes::MeshExtractor;

// Parallel meshing helpers
pub mod meshing;
pub use meshing::{mesh_batch, mesh_chunked, mesh_field, merge_chunks, ChunkMesh, MeshResult};

// Task queue for parallel meshing
pub mod task_queue;
pub use task_queue::{BackgroundMesher, MeshCompletion, MeshRequest, MeshingStage};

// Engine-agnostic metrics
pub mod metrics;
pub use metrics::{MeshingMetrics, SampleWindow};

// Mesh export
pub mod export;
pub use export::write_obj;

pub use glam::Vec3;
