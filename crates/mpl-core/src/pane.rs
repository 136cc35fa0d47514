// ABOUTME: Per-pane metadata supplied alongside each content item.
// ABOUTME: Carries the optional minimum size and default share of a pane.

use serde::{Deserialize, Serialize};

/// Layout metadata for one content item.
///
/// The engine never looks at pane content; everything it needs to know about
/// an item is declared here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneDescriptor {
    /// Smallest size the pane may be dragged to, in absolute length units
    pub min_size: Option<f64>,
    /// Initial share of the container, in percent
    pub default_size: Option<f64>,
}

impl PaneDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn with_default_size(mut self, percent: f64) -> Self {
        self.default_size = Some(percent);
        self
    }

    /// `count` panes with no metadata
    pub fn uniform(count: usize) -> Vec<Self> {
        vec![Self::default(); count]
    }
}
