// ABOUTME: Split axis and container extent types.
// ABOUTME: Maps the configured split direction onto width or height.

use serde::{Deserialize, Serialize};

/// The dimension along which panes are laid out and resized.
///
/// `Primary` splits the container's width into a row of panes,
/// `Cross` splits its height into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    #[serde(alias = "horizontal", alias = "row")]
    Primary,
    #[serde(alias = "vertical", alias = "column")]
    Cross,
}

impl Axis {
    /// Length of the container along this axis
    pub fn along(self, extent: Extent) -> f64 {
        match self {
            Axis::Primary => extent.primary,
            Axis::Cross => extent.cross,
        }
    }

    /// Length of the container perpendicular to this axis
    pub fn across(self, extent: Extent) -> f64 {
        match self {
            Axis::Primary => extent.cross,
            Axis::Cross => extent.primary,
        }
    }
}

/// Measured size of the container being split
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Width
    pub primary: f64,
    /// Height
    pub cross: f64,
}

impl Extent {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(primary: f64, cross: f64) -> Self {
        Self { primary, cross }
    }
}
