// ABOUTME: Split layout engine tying sizing, dragging, reflow and notification together.
// ABOUTME: Owns the layout state and reacts to mount, measurement, content and pointer events.

use mpl_core::{Extent, Palette, PaneDescriptor, ReportShape, SplitConfig};

use crate::constraint::ConstraintPolicy;
use crate::drag::{DragController, DragOutcome, DragPhase};
use crate::geometry::{self, Geometry};
use crate::host::{FrameId, Host, QueueHost, Subscription};
use crate::notify::{ChangeNotifier, SizeReport};
use crate::reflow::ReflowController;
use crate::size::{to_proportional, SizeModel};
use crate::state::LayoutState;

/// One row or column of resizable panes.
///
/// Everything is driven by the host calling in: `measure` when the container
/// size is known or changes, `pointer_*` for splitter interaction and
/// `run_frame` when a scheduled layout pass comes due. Sizes are only
/// computed once the container has a positive extent along the split axis.
pub struct SplitLayout<H: Host> {
    config: SplitConfig,
    palette: Palette,
    model: SizeModel,
    drag: DragController,
    reflow: ReflowController,
    notifier: ChangeNotifier,
    state: LayoutState,
    /// Sizes handed to `set_sizes` before the first layout
    pending_sizes: Option<Vec<f64>>,
    hover: Option<usize>,
    subscription: Option<Subscription>,
    host: H,
}

impl<H: Host> SplitLayout<H> {
    pub fn new(config: SplitConfig, panes: &[PaneDescriptor], host: H) -> Self {
        let model = SizeModel::new(config.regime);
        let policy = ConstraintPolicy::new(config.min_size);

        Self {
            palette: config.theme.palette(),
            model,
            drag: DragController::new(model, policy),
            reflow: ReflowController::new(),
            notifier: ChangeNotifier::new(config.report),
            state: LayoutState::new(config.axis, panes),
            pending_sizes: None,
            hover: None,
            subscription: None,
            host,
            config,
        }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&SizeReport) + 'static) {
        self.notifier.set_listener(listener);
    }

    pub fn clear_listener(&mut self) {
        self.notifier.clear_listener();
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Attach to the host: acquire the pointer subscription and lay out if
    /// the container is already measured. Calling it again is harmless.
    pub fn mount(&mut self) {
        if self.subscription.is_none() {
            self.subscription = Some(self.host.subscribe_pointer());
            tracing::debug!("Mounted split layout with {} panes", self.state.len());
        }
        if !self.state.is_laid_out() {
            self.initialize();
        }
    }

    /// Detach from the host, cancelling any pending pass and ending any drag
    pub fn unmount(&mut self) {
        self.reflow.cancel(&mut self.host);
        if let Some(subscription) = self.subscription.take() {
            self.host.unsubscribe_pointer(subscription);
            tracing::debug!("Unmounted split layout");
        }
        self.drag.release(&mut self.state);
        self.hover = None;
    }

    /// Replace the pane sequence. Prior sizes are discarded and the panes
    /// are initialized again from configuration.
    pub fn set_content(&mut self, panes: &[PaneDescriptor]) {
        self.reflow.cancel(&mut self.host);
        self.state.rebuild(panes);
        self.pending_sizes = None;
        self.hover = None;
        self.initialize();
    }

    /// Record a new container size from the measurement source.
    ///
    /// The first usable measurement lays the panes out immediately. Later
    /// changes schedule a single reflow pass; a burst of measurements before
    /// that pass runs collapses into one.
    pub fn measure(&mut self, extent: Extent) {
        let previous = self.state.container();
        self.state.set_container(extent);

        if !self.state.is_measured() {
            tracing::debug!("Container unmeasured ({:?})", extent);
            return;
        }

        if !self.state.is_laid_out() {
            self.initialize();
            return;
        }

        if previous == extent {
            return;
        }

        let axis_changed = self.state.axis().along(previous) != self.state.axis().along(extent);
        if (self.model.is_absolute() && axis_changed)
            || self.notifier.shape() == ReportShape::Dimensions
        {
            self.reflow.schedule(&mut self.host);
        }
    }

    /// Run a pass the host scheduled earlier. Stale or unknown frames are
    /// ignored; returns whether the frame was ours.
    pub fn run_frame(&mut self, frame: FrameId) -> bool {
        if !self.reflow.take(frame) {
            tracing::debug!("Ignoring stale frame {:?}", frame);
            return false;
        }

        let rescaled = self.model.is_absolute() && ReflowController::apply(&mut self.state);
        if rescaled || self.notifier.shape() == ReportShape::Dimensions {
            self.notifier.notify(&self.state, self.model);
        }
        true
    }

    fn initialize(&mut self) -> bool {
        if self.state.is_empty() {
            return false;
        }
        if !self.state.is_measured() {
            tracing::debug!(
                "Deferring layout of {} panes until the container is measured",
                self.state.len()
            );
            return false;
        }

        let explicit = self
            .pending_sizes
            .take()
            .or_else(|| self.config.explicit_sizes.clone());
        let sizes = self.model.initial_sizes(
            &self.state.descriptors(),
            explicit.as_deref(),
            self.state.extent(),
        );

        self.state.commit(&sizes);
        tracing::info!(
            "Laid out {} panes over {}: {:?}",
            sizes.len(),
            self.state.extent(),
            sizes
        );
        self.notifier.notify(&self.state, self.model);
        true
    }

    /// Splitter `splitter` pressed at `position` along the axis
    pub fn pointer_down(&mut self, splitter: usize, position: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.drag.press(&mut self.state, splitter, position)
    }

    pub fn pointer_move(&mut self, position: f64) -> DragOutcome {
        if !self.is_mounted() {
            return DragOutcome::Ignored;
        }
        let outcome = self.drag.move_to(&mut self.state, position);
        if outcome == DragOutcome::Accepted {
            self.notifier.notify(&self.state, self.model);
        }
        outcome
    }

    pub fn pointer_up(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.drag.release(&mut self.state)
    }

    /// Splitter currently under the pointer, for hover styling
    pub fn pointer_hover(&mut self, splitter: Option<usize>) {
        self.hover = splitter.filter(|s| *s < self.state.len().saturating_sub(1));
    }

    pub fn phase(&self) -> DragPhase {
        self.drag.phase(&self.state)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// False until sizes have been committed for the current panes
    pub fn is_laid_out(&self) -> bool {
        self.state.is_laid_out()
    }

    /// Replace every pane size, in the active unit.
    ///
    /// Rejected without effect if the count doesn't match the pane count.
    /// Before the first layout the sizes are kept and used for it.
    pub fn set_sizes(&mut self, sizes: &[f64]) -> bool {
        if sizes.len() != self.state.len() {
            tracing::warn!(
                "Ignoring {} sizes for {} panes",
                sizes.len(),
                self.state.len()
            );
            return false;
        }

        if !self.state.is_laid_out() {
            self.pending_sizes = Some(sizes.to_vec());
            return true;
        }

        self.state.commit(sizes);
        self.notifier.notify(&self.state, self.model);
        true
    }

    /// Current sizes in the active unit; empty before the first layout
    pub fn sizes(&self) -> Vec<f64> {
        if !self.state.is_laid_out() {
            return Vec::new();
        }
        self.state.sizes()
    }

    /// Current sizes as percentages of the extent they were laid out for
    pub fn sizes_as_percent(&self) -> Vec<f64> {
        let extent = self.state.sized_extent().unwrap_or(0.0);
        self.sizes()
            .into_iter()
            .map(|s| self.model.to_percent(s, extent))
            .collect()
    }

    /// Current sizes as absolute lengths along the axis
    pub fn lengths(&self) -> Vec<f64> {
        let extent = self.state.extent();
        self.sizes()
            .into_iter()
            .map(|s| self.model.to_length(s, extent))
            .collect()
    }

    /// Minimum absolute length of pane `index`
    pub fn min_size(&self, index: usize) -> f64 {
        self.drag.policy().min_size(index, self.state.panes())
    }

    /// Minimum of pane `index` as a percentage of the current extent
    pub fn min_percent(&self, index: usize) -> f64 {
        to_proportional(self.min_size(index), self.state.extent())
    }

    /// Last report the listener would have received
    pub fn report(&self) -> Option<SizeReport> {
        self.notifier.report(&self.state, self.model)
    }

    /// Pane and splitter rectangles for the renderer
    pub fn geometry(&self) -> Geometry {
        if !self.state.is_laid_out() || !self.state.is_measured() {
            return Geometry::default();
        }
        let active = match self.phase() {
            DragPhase::Dragging { splitter } => Some(splitter),
            DragPhase::Idle => None,
        };
        geometry::compute(
            self.state.axis(),
            self.state.container(),
            &self.lengths(),
            self.config.splitter_thickness,
            active,
            self.hover,
            &self.palette,
        )
    }
}

impl SplitLayout<QueueHost> {
    /// Run every frame the queue host has due; returns how many were ours
    pub fn run_pending_frames(&mut self) -> usize {
        let mut ran = 0;
        while let Some(frame) = self.host.next_frame() {
            if self.run_frame(frame) {
                ran += 1;
            }
        }
        ran
    }
}

impl<H: Host> Drop for SplitLayout<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
