// ABOUTME: Shared types and configuration for multi-pane split layouts.
// ABOUTME: Defines colors, themes, axis/extent types, pane metadata and config handling.

pub mod axis;
pub mod color;
pub mod config;
pub mod pane;
pub mod theme;

pub use axis::{Axis, Extent};
pub use color::Color;
pub use config::{ConfigError, ReportShape, SizeRegime, SplitConfig};
pub use pane::PaneDescriptor;
pub use theme::{Palette, Theme};
