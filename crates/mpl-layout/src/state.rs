// ABOUTME: Authoritative layout record for one split container.
// ABOUTME: Holds the measured extent, per-pane sizes and the live drag session.

use mpl_core::{Axis, Extent, PaneDescriptor};

use crate::drag::DragSession;

/// One resizable region. Its index is its identity; panes never reorder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pane {
    pub index: usize,
    /// Current size in the layout's active unit
    pub size: f64,
    pub min_size: Option<f64>,
    pub default_size: Option<f64>,
}

impl Pane {
    pub fn new(index: usize, descriptor: &PaneDescriptor) -> Self {
        Self {
            index,
            size: 0.0,
            min_size: descriptor.min_size,
            default_size: descriptor.default_size,
        }
    }

    pub fn descriptor(&self) -> PaneDescriptor {
        PaneDescriptor {
            min_size: self.min_size,
            default_size: self.default_size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    axis: Axis,
    container: Extent,
    panes: Vec<Pane>,
    /// Axis extent the committed sizes were computed for; `None` until laid out
    sized_extent: Option<f64>,
    drag: Option<DragSession>,
}

impl LayoutState {
    pub fn new(axis: Axis, descriptors: &[PaneDescriptor]) -> Self {
        let mut state = Self {
            axis,
            container: Extent::ZERO,
            panes: Vec::new(),
            sized_extent: None,
            drag: None,
        };
        state.rebuild(descriptors);
        state
    }

    /// Replace the pane set, discarding sizes and any drag in progress
    pub fn rebuild(&mut self, descriptors: &[PaneDescriptor]) {
        self.panes = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| Pane::new(i, d))
            .collect();
        self.sized_extent = None;
        self.drag = None;
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn container(&self) -> Extent {
        self.container
    }

    pub fn set_container(&mut self, container: Extent) {
        self.container = container;
    }

    /// Container length along the split axis
    pub fn extent(&self) -> f64 {
        self.axis.along(self.container)
    }

    /// Container length perpendicular to the split axis
    pub fn cross_extent(&self) -> f64 {
        self.axis.across(self.container)
    }

    pub fn is_measured(&self) -> bool {
        self.extent() > 0.0
    }

    /// Sizes have been committed for the current pane set
    pub fn is_laid_out(&self) -> bool {
        self.sized_extent.is_some() && !self.panes.is_empty()
    }

    pub fn sized_extent(&self) -> Option<f64> {
        self.sized_extent
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn descriptors(&self) -> Vec<PaneDescriptor> {
        self.panes.iter().map(Pane::descriptor).collect()
    }

    pub fn sizes(&self) -> Vec<f64> {
        self.panes.iter().map(|p| p.size).collect()
    }

    pub fn total(&self) -> f64 {
        self.panes.iter().map(|p| p.size).sum()
    }

    /// Commit a full size vector against the current extent.
    ///
    /// While unmeasured the previous sizing extent is kept as the reflow
    /// baseline. Returns false (leaving state untouched) if the length
    /// doesn't match.
    pub fn commit(&mut self, sizes: &[f64]) -> bool {
        if sizes.len() != self.panes.len() {
            return false;
        }
        for (pane, size) in self.panes.iter_mut().zip(sizes) {
            pane.size = *size;
        }
        if self.is_measured() {
            self.sized_extent = Some(self.extent());
        }
        true
    }

    /// Set the two panes either side of splitter `splitter`
    pub(crate) fn set_pair(&mut self, splitter: usize, left: f64, right: f64) {
        if let Some([a, b]) = self.panes.get_mut(splitter..splitter + 2) {
            a.size = left;
            b.size = right;
        }
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub(crate) fn drag_mut(&mut self) -> Option<&mut DragSession> {
        self.drag.as_mut()
    }

    pub(crate) fn set_drag(&mut self, session: Option<DragSession>) {
        self.drag = session;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
