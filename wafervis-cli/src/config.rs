//! Configuration handling for the wafervis CLI
//!
//! Supports loading configuration from wafervis.toml files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wafervis_core::{FeatureFlags, RowSpan, UnitGeometry, WaferGrid, ZoomThresholds};

use crate::error::CliError;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wafervis.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub flags: FeatureFlags,
    #[serde(default)]
    pub geometry: UnitGeometry,
}

/// Shape of the unit grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLayout {
    /// The round 384-unit wafer
    Wafer,
    /// `columns` x `rows`, row-major
    Rectangular,
    /// Explicit `row_spans`
    Rows,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_layout")]
    pub layout: GridLayout,

    /// Columns of a rectangular layout
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Rows of a rectangular layout
    #[serde(default = "default_rows")]
    pub rows: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_spans: Vec<RowSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Canvas height in pixels, used to derive the tier thresholds
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,

    /// Explicit detail one threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_one: Option<f64>,

    /// Explicit detail two threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_two: Option<f64>,
}

// Default value functions
fn default_layout() -> GridLayout { GridLayout::Wafer }
fn default_columns() -> u32 { 36 }
fn default_rows() -> u32 { 16 }
fn default_canvas_height() -> f64 { 1000.0 }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            columns: default_columns(),
            rows: default_rows(),
            row_spans: Vec::new(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            canvas_height: default_canvas_height(),
            detail_one: None,
            detail_two: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::info!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")
    }

    /// Build the unit grid described by the `[grid]` section
    pub fn build_grid(&self) -> Result<WaferGrid> {
        let grid = match self.grid.layout {
            GridLayout::Wafer => WaferGrid::standard_wafer(),
            GridLayout::Rectangular => WaferGrid::rectangular(self.grid.columns, self.grid.rows),
            GridLayout::Rows => WaferGrid::from_rows(&self.grid.row_spans),
        };
        grid.map_err(CliError::from)
            .with_context(|| format!("Invalid {:?} grid layout", self.grid.layout))
    }

    /// Tier thresholds: explicit values win over the canvas-derived ones
    pub fn zoom_thresholds(&self) -> ZoomThresholds {
        let derived = ZoomThresholds::for_canvas(self.zoom.canvas_height, &self.geometry);
        ZoomThresholds::new(
            self.zoom.detail_one.unwrap_or(derived.detail_one),
            self.zoom.detail_two.unwrap_or(derived.detail_two),
        )
    }
}
