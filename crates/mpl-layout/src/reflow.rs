// ABOUTME: Rescales absolute pane sizes when the container is resized.
// ABOUTME: Coalesces bursts of resize notifications into a single scheduled pass.

use crate::host::{FrameId, Host};
use crate::state::LayoutState;

/// Scale `sizes` from `old_extent` to `new_extent`, preserving each share.
///
/// `None` when either extent is not positive.
pub fn rescale(sizes: &[f64], old_extent: f64, new_extent: f64) -> Option<Vec<f64>> {
    if old_extent <= 0.0 || new_extent <= 0.0 {
        return None;
    }
    let scale = new_extent / old_extent;
    Some(sizes.iter().map(|s| s * scale).collect())
}

#[derive(Debug, Default)]
pub struct ReflowController {
    pending: Option<FrameId>,
}

impl ReflowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Schedule a pass, replacing any pass that hasn't run yet
    pub fn schedule<H: Host>(&mut self, host: &mut H) -> FrameId {
        if let Some(stale) = self.pending.take() {
            tracing::debug!("Coalescing resize: cancelling frame {:?}", stale);
            host.cancel_frame(stale);
        }
        let frame = host.request_frame();
        self.pending = Some(frame);
        frame
    }

    pub fn cancel<H: Host>(&mut self, host: &mut H) {
        if let Some(frame) = self.pending.take() {
            host.cancel_frame(frame);
        }
    }

    /// Claim `frame` if it is the pass this controller is waiting for
    pub fn take(&mut self, frame: FrameId) -> bool {
        if self.pending == Some(frame) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Rescale committed sizes to the container's current extent.
    ///
    /// A drag in progress has its start snapshot scaled the same way so the
    /// next pointer sample continues from consistent numbers. Returns false
    /// if there was nothing to scale.
    pub fn apply(state: &mut LayoutState) -> bool {
        let Some(old_extent) = state.sized_extent() else {
            return false;
        };
        let new_extent = state.extent();
        let Some(sizes) = rescale(&state.sizes(), old_extent, new_extent) else {
            return false;
        };

        if let Some(session) = state.drag_mut() {
            if let Some(start) = rescale(&session.start_sizes, old_extent, new_extent) {
                session.start_sizes = start;
            }
        }

        tracing::debug!("Reflow {} -> {}", old_extent, new_extent);
        state.commit(&sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::QueueHost;
    use mpl_core::{Axis, Extent, PaneDescriptor};

    #[test]
    fn rescale_preserves_ratios() {
        let sizes = rescale(&[30.0, 70.0], 100.0, 200.0).unwrap();
        assert_eq!(sizes, vec![60.0, 140.0]);
    }

    #[test]
    fn rescale_guards_non_positive_extents() {
        assert!(rescale(&[30.0, 70.0], 0.0, 200.0).is_none());
        assert!(rescale(&[30.0, 70.0], 100.0, 0.0).is_none());
    }

    #[test]
    fn schedule_cancels_previous_pass() {
        let mut host = QueueHost::new();
        let mut reflow = ReflowController::new();
        let first = reflow.schedule(&mut host);
        let second = reflow.schedule(&mut host);

        assert_eq!(host.pending_frames(), 1);
        assert_eq!(host.next_frame(), Some(second));
        assert!(!reflow.take(first));
        assert!(reflow.take(second));
        assert_eq!(reflow.pending(), None);
    }

    #[test]
    fn apply_scales_to_current_extent() {
        let mut state = LayoutState::new(Axis::Primary, &PaneDescriptor::uniform(2));
        state.set_container(Extent::new(100.0, 50.0));
        state.commit(&[30.0, 70.0]);

        state.set_container(Extent::new(200.0, 50.0));
        assert!(ReflowController::apply(&mut state));
        assert_eq!(state.sizes(), vec![60.0, 140.0]);
        assert_eq!(state.sized_extent(), Some(200.0));
    }

    #[test]
    fn apply_skips_collapsed_container() {
        let mut state = LayoutState::new(Axis::Primary, &PaneDescriptor::uniform(2));
        state.set_container(Extent::new(100.0, 50.0));
        state.commit(&[30.0, 70.0]);

        state.set_container(Extent::ZERO);
        assert!(!ReflowController::apply(&mut state));
        assert_eq!(state.sizes(), vec![30.0, 70.0]);
        assert_eq!(state.sized_extent(), Some(100.0));
    }
}
