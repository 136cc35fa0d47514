// ABOUTME: Change notification for pane sizes.
// ABOUTME: Builds the size report a listener asked for and guards against partial states.

use std::fmt;

use mpl_core::ReportShape;

use crate::size::SizeModel;
use crate::state::LayoutState;

/// What the change listener receives
#[derive(Debug, Clone, PartialEq)]
pub enum SizeReport {
    /// One size per pane in the layout's active unit
    Sizes(Vec<f64>),
    /// `(size along axis, cross extent)` per pane in absolute units
    Dimensions(Vec<(f64, f64)>),
}

impl SizeReport {
    pub fn len(&self) -> usize {
        match self {
            SizeReport::Sizes(sizes) => sizes.len(),
            SizeReport::Dimensions(dims) => dims.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type SizeListener = Box<dyn FnMut(&SizeReport)>;

pub struct ChangeNotifier {
    shape: ReportShape,
    listener: Option<SizeListener>,
}

impl ChangeNotifier {
    pub fn new(shape: ReportShape) -> Self {
        Self {
            shape,
            listener: None,
        }
    }

    pub fn shape(&self) -> ReportShape {
        self.shape
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&SizeReport) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Build the report for the current state.
    ///
    /// `None` while the container is unmeasured or sizes aren't committed.
    pub fn report(&self, state: &LayoutState, model: SizeModel) -> Option<SizeReport> {
        if !state.is_measured() || !state.is_laid_out() {
            return None;
        }

        let sizes = state.sizes();
        if sizes.is_empty() || sizes.len() != state.len() {
            return None;
        }

        Some(match self.shape {
            ReportShape::Sizes => SizeReport::Sizes(sizes),
            ReportShape::Dimensions => {
                let extent = state.extent();
                let cross = state.cross_extent();
                SizeReport::Dimensions(
                    sizes
                        .into_iter()
                        .map(|s| (model.to_length(s, extent), cross))
                        .collect(),
                )
            }
        })
    }

    /// Send the current sizes to the listener. Returns whether it fired.
    pub fn notify(&mut self, state: &LayoutState, model: SizeModel) -> bool {
        let Some(report) = self.report(state, model) else {
            return false;
        };
        match self.listener.as_mut() {
            Some(listener) => {
                listener(&report);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("shape", &self.shape)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
