// ABOUTME: Rendered geometry for panes and splitters.
// ABOUTME: Turns pane lengths into rectangles and resolves splitter colors from the palette.

use mpl_core::{Axis, Color, Extent, Palette};

/// Rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle starting `offset` along `axis`, `length` long, spanning `cross`
    fn span(axis: Axis, offset: f64, length: f64, cross: f64) -> Self {
        match axis {
            Axis::Primary => Self {
                x: offset,
                y: 0.0,
                width: length,
                height: cross,
            },
            Axis::Cross => Self {
                x: 0.0,
                y: offset,
                width: cross,
                height: length,
            },
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterState {
    Idle,
    Hover,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneGeometry {
    pub index: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitterGeometry {
    /// Splitter `i` sits between pane `i` and pane `i + 1`
    pub index: usize,
    pub rect: Rect,
    pub state: SplitterState,
    pub bar: Color,
    pub handle: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub panes: Vec<PaneGeometry>,
    pub splitters: Vec<SplitterGeometry>,
}

impl Geometry {
    /// Splitter under the given point, if any
    pub fn splitter_at(&self, x: f64, y: f64) -> Option<usize> {
        self.splitters
            .iter()
            .find(|s| s.rect.contains(x, y))
            .map(|s| s.index)
    }
}

fn colors(state: SplitterState, palette: &Palette) -> (Color, Color) {
    match state {
        SplitterState::Idle => (palette.splitter, palette.handle),
        SplitterState::Hover => (palette.splitter_hover, palette.handle_hover),
        SplitterState::Active => (palette.splitter_active, palette.handle_active),
    }
}

/// Lay out panes of the given absolute `lengths` along `axis`.
///
/// Splitter bars are centered on the boundary between their two panes and
/// kept inside the container. Hover is only shown while nothing is dragged.
pub fn compute(
    axis: Axis,
    container: Extent,
    lengths: &[f64],
    thickness: f64,
    active: Option<usize>,
    hover: Option<usize>,
    palette: &Palette,
) -> Geometry {
    let extent = axis.along(container);
    let cross = axis.across(container);
    let thickness = thickness.max(0.0).min(extent.max(0.0));

    let mut geometry = Geometry::default();
    let mut offset = 0.0;

    for (index, length) in lengths.iter().enumerate() {
        geometry.panes.push(PaneGeometry {
            index,
            rect: Rect::span(axis, offset, *length, cross),
        });
        offset += length;

        if index + 1 == lengths.len() {
            break;
        }

        let state = match (active, hover) {
            (Some(a), _) if a == index => SplitterState::Active,
            (None, Some(h)) if h == index => SplitterState::Hover,
            _ => SplitterState::Idle,
        };
        let (bar, handle) = colors(state, palette);
        let start = (offset - thickness / 2.0).min(extent - thickness).max(0.0);

        geometry.splitters.push(SplitterGeometry {
            index,
            rect: Rect::span(axis, start, thickness, cross),
            state,
            bar,
            handle,
        });
    }

    geometry
}
