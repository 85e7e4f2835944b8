//! Configuration parsing for mesh baking.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use voxel_marching::{ExtractorConfig, NanPolicy};

/// Root configuration for a bake.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BakeConfig {
	/// Output OBJ path, relative to the config file.
	pub output: String,
	/// Surface threshold. Defaults to 0, or the threshold for metaballs.
	pub iso_level: Option<f32>,
	/// Mesh in parallel chunks of this many cells per axis.
	pub chunk_cells: Option<usize>,
	/// Sampling grid.
	pub grid: GridConfig,
	/// Field to sample.
	pub field: FieldConfig,
	/// Extractor options.
	#[serde(default)]
	pub extractor: ExtractorSection,
}

/// Cubic grid centered on the origin.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
	/// Samples per axis.
	pub size: usize,
	/// Half edge length in world units; the grid spans `[-extent, extent]`.
	pub extent: f32,
}

/// Analytic field definitions.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldConfig {
	Sphere {
		radius: f32,
		#[serde(default)]
		center: [f32; 3],
	},
	Plane {
		height: f32,
		#[serde(default = "default_up")]
		normal: [f32; 3],
	},
	Metaballs {
		seed: u32,
		count: usize,
		/// Balls are scattered within `[-spread, spread]³`.
		#[serde(default = "default_spread")]
		spread: f32,
		#[serde(default = "default_threshold")]
		threshold: f32,
	},
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorSection {
	#[serde(default)]
	pub nan_policy: NanPolicyConfig,
	#[serde(default)]
	pub reserve_hint: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicyConfig {
	#[default]
	TreatAsBelow,
	SkipCell,
}

fn default_up() -> [f32; 3] {
	[0.0, 1.0, 0.0]
}

fn default_spread() -> f32 {
	1.0
}

fn default_threshold() -> f32 {
	1.0
}

impl BakeConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let config: BakeConfig =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.output.trim().is_empty() {
			anyhow::bail!("output path must not be empty");
		}
		if self.grid.size < 2 {
			anyhow::bail!("grid.size must be at least 2, got {}", self.grid.size);
		}
		if !(self.grid.extent > 0.0) {
			anyhow::bail!("grid.extent must be positive, got {}", self.grid.extent);
		}
		if let Some(chunk_cells) = self.chunk_cells {
			let cells = self.grid.size - 1;
			if chunk_cells == 0 || cells % chunk_cells != 0 {
				anyhow::bail!(
					"chunk_cells must evenly divide the {} cells per axis, got {}",
					cells,
					chunk_cells
				);
			}
		}

		match &self.field {
			FieldConfig::Sphere { radius, .. } if !(*radius > 0.0) => {
				anyhow::bail!("sphere radius must be positive, got {}", radius);
			}
			FieldConfig::Plane { normal, .. } if normal.iter().all(|&c| c == 0.0) => {
				anyhow::bail!("plane normal must be non-zero");
			}
			FieldConfig::Metaballs { count: 0, .. } => {
				anyhow::bail!("metaballs need at least one ball");
			}
			FieldConfig::Metaballs { spread, .. } if !(*spread > 0.0) => {
				anyhow::bail!("metaballs spread must be positive, got {}", spread);
			}
			_ => {}
		}

		Ok(())
	}

	/// Effective iso level.
	pub fn iso_level(&self) -> f32 {
		match (self.iso_level, &self.field) {
			(Some(iso), _) => iso,
			(None, FieldConfig::Metaballs { threshold, .. }) => *threshold,
			(None, _) => 0.0,
		}
	}

	pub fn extractor_config(&self) -> ExtractorConfig {
		let nan_policy = match self.extractor.nan_policy {
			NanPolicyConfig::TreatAsBelow => NanPolicy::TreatAsBelow,
			NanPolicyConfig::SkipCell => NanPolicy::SkipCell,
		};
		ExtractorConfig::new()
			.with_nan_policy(nan_policy)
			.with_reserve_hint(self.extractor.reserve_hint)
	}
}
