// ABOUTME: Split layout configuration handling.
// ABOUTME: Loads and saves split settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Axis, Theme};

/// Unit pane sizes are stored in for the lifetime of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizeRegime {
    /// Percentages of the container extent; unaffected by container resizes
    #[default]
    Proportional,
    /// Raw length units; rescaled whenever the container extent changes
    Absolute,
}

/// Shape of the size vector handed to the change listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
    /// One size per pane, in the layout's active unit
    #[default]
    Sizes,
    /// `(size along axis, cross extent)` per pane, in absolute units
    Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Direction panes are laid out in
    pub axis: Axis,

    /// Starting sizes, one per pane in the active unit (ignored on count mismatch)
    pub explicit_sizes: Option<Vec<f64>>,

    /// Minimum pane size for panes that don't declare their own
    pub min_size: Option<f64>,

    /// Thickness of each splitter bar along the axis
    pub splitter_thickness: f64,

    /// Unit pane sizes are kept in
    pub regime: SizeRegime,

    /// What the change listener receives
    pub report: ReportShape,

    /// Splitter colors, by name or as an explicit palette table
    pub theme: Theme,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Primary,
            explicit_sizes: None,
            min_size: None,
            splitter_thickness: 8.0,
            regime: SizeRegime::Proportional,
            report: ReportShape::Sizes,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl SplitConfig {
    /// Get the default config file path (~/.config/multipanel/layout.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("multipanel").join("layout.toml"))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
