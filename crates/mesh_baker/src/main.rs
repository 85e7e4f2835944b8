//! Scalar field mesh baker.
//!
//! Samples an analytic field on a centered grid, extracts its isosurface with
//! marching cubes and writes the triangle soup as Wavefront OBJ.
//!
//! Set `RUST_LOG=debug` to see per-extraction summaries.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use voxel_marching::{
	mesh_chunked, mesh_field, merge_chunks, write_obj, GridMapping, MeshOutput, MeshingMetrics,
	MetaballsField, PlaneField, ScalarField, SphereField, Vec3,
};

use config::{BakeConfig, FieldConfig};

/// Scalar field mesh baker.
#[derive(Parser, Debug)]
#[command(name = "bake_mesh")]
#[command(about = "Extracts isosurfaces from analytic fields into OBJ meshes")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Output path (default: `output` from the config, relative to it).
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Override the iso level.
	#[arg(long)]
	iso: Option<f32>,
}

fn build_field(config: &BakeConfig, mapping: GridMapping) -> Box<dyn ScalarField + Sync> {
	match config.field {
		FieldConfig::Sphere { radius, center } => {
			Box::new(SphereField::new(mapping, radius).with_center(Vec3::from_array(center)))
		}
		FieldConfig::Plane { height, normal } => {
			Box::new(PlaneField::new(mapping, height).with_normal(Vec3::from_array(normal)))
		}
		FieldConfig::Metaballs {
			seed,
			count,
			spread,
			threshold,
		} => Box::new(MetaballsField::random(mapping, seed, count, spread).with_threshold(threshold)),
	}
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	info!("Loading config from: {}", args.config.display());
	let config = BakeConfig::load(&args.config)?;

	let output_path = args.output.clone().unwrap_or_else(|| {
		args.config
			.parent()
			.unwrap_or(Path::new("."))
			.join(&config.output)
	});
	let iso_level = args.iso.unwrap_or_else(|| config.iso_level());
	let extractor_config = config.extractor_config();

	let mapping = GridMapping::centered(config.grid.size, config.grid.extent);
	let field = build_field(&config, mapping);
	info!(
		size = mapping.size,
		spacing = mapping.spacing,
		world_size = mapping.extent(),
		iso_level,
		"Sampling {:?}",
		config.field
	);

	let mut metrics = MeshingMetrics::new();
	let mesh: MeshOutput = match config.chunk_cells {
		Some(chunk_cells) => {
			let chunks = mesh_chunked(field.as_ref(), chunk_cells, iso_level, &extractor_config)
				.context("Chunking field")?;
			for chunk in &chunks {
				metrics.record_mesh(chunk.result.timing_us, &chunk.result.stats);
			}
			info!(chunks = chunks.len(), "Meshed in chunks of {} cells", chunk_cells);
			merge_chunks(&chunks)
		}
		None => {
			let result = mesh_field(field.as_ref(), iso_level, &extractor_config);
			metrics.record_mesh(result.timing_us, &result.stats);
			result.output
		}
	};

	info!(
		triangles = mesh.triangle_count(),
		avg_mesh_us = metrics.avg_mesh_timing_us(),
		peak_mesh_us = metrics.peak_mesh_timing_us().unwrap_or(0),
		active_ratio = metrics.active_cell_ratio(),
		"Extraction complete"
	);
	if mesh.is_empty() {
		tracing::warn!("Field has no crossing at iso level {}; writing empty mesh", iso_level);
	}

	let file = File::create(&output_path)
		.with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
	write_obj(&mesh, BufWriter::new(file))
		.with_context(|| format!("Failed to write OBJ: {}", output_path.display()))?;

	info!("Wrote {}", output_path.display());
	Ok(())
}
