// ABOUTME: Interactive splitter drag state machine.
// ABOUTME: Moves size between the two panes around a splitter, enforcing minimum sizes.

use crate::constraint::ConstraintPolicy;
use crate::size::SizeModel;
use crate::state::LayoutState;

/// Slack allowed when comparing a proposed size against its minimum
const MIN_SIZE_TOLERANCE: f64 = 1e-9;

/// Snapshot taken when a splitter is pressed; lives until release
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub splitter: usize,
    /// Pointer coordinate along the axis at press time
    pub start_position: f64,
    /// Every pane's size at press time, in the active unit
    pub start_sizes: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging { splitter: usize },
}

/// Result of feeding one pointer sample to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Both panes were resized
    Accepted,
    /// The move would shrink a pane below its minimum; nothing changed
    Rejected,
    /// No drag in progress, or the container has no usable extent
    Ignored,
}

/// Sizes of the pair around `splitter` after moving it by `delta`.
///
/// The pair's total is preserved, so no other pane is affected.
pub fn propose(start_sizes: &[f64], splitter: usize, delta: f64) -> Option<(f64, f64)> {
    let left = start_sizes.get(splitter)?;
    let right = start_sizes.get(splitter + 1)?;
    Some((left + delta, right - delta))
}

#[derive(Debug, Clone, Copy)]
pub struct DragController {
    model: SizeModel,
    policy: ConstraintPolicy,
}

impl DragController {
    pub fn new(model: SizeModel, policy: ConstraintPolicy) -> Self {
        Self { model, policy }
    }

    pub fn policy(&self) -> &ConstraintPolicy {
        &self.policy
    }

    pub fn phase(&self, state: &LayoutState) -> DragPhase {
        match state.drag() {
            Some(session) => DragPhase::Dragging {
                splitter: session.splitter,
            },
            None => DragPhase::Idle,
        }
    }

    /// Idle -> Dragging. Returns false if there is no such splitter or the
    /// layout has no sizes yet.
    pub fn press(&self, state: &mut LayoutState, splitter: usize, position: f64) -> bool {
        if !state.is_laid_out() || splitter >= state.len().saturating_sub(1) {
            tracing::debug!("Ignoring press on splitter {}", splitter);
            return false;
        }

        state.set_drag(Some(DragSession {
            splitter,
            start_position: position,
            start_sizes: state.sizes(),
        }));
        tracing::debug!("Drag started on splitter {} at {}", splitter, position);
        true
    }

    /// Dragging -> Dragging. Applies the pointer sample if both panes stay at
    /// or above their minimum; otherwise the move is dropped.
    pub fn move_to(&self, state: &mut LayoutState, position: f64) -> DragOutcome {
        let Some(session) = state.drag() else {
            return DragOutcome::Ignored;
        };

        let extent = state.extent();
        if extent <= 0.0 {
            return DragOutcome::Ignored;
        }

        let splitter = session.splitter;
        let delta = self
            .model
            .from_length(position - session.start_position, extent);
        let Some((left, right)) = propose(&session.start_sizes, splitter, delta) else {
            return DragOutcome::Ignored;
        };

        // Re-evaluated every sample; the extent may have changed since press
        let min_left = self.policy.min_in_unit(splitter, state.panes(), self.model, extent);
        let min_right = self
            .policy
            .min_in_unit(splitter + 1, state.panes(), self.model, extent);

        if !left.is_finite() || !right.is_finite() {
            tracing::debug!("Rejected non-finite move on splitter {}", splitter);
            return DragOutcome::Rejected;
        }

        if left + MIN_SIZE_TOLERANCE < min_left || right + MIN_SIZE_TOLERANCE < min_right {
            tracing::debug!(
                "Rejected move on splitter {}: {:.2}/{:.2} below minimum {:.2}/{:.2}",
                splitter,
                left,
                right,
                min_left,
                min_right
            );
            return DragOutcome::Rejected;
        }

        state.set_pair(splitter, left, right);
        DragOutcome::Accepted
    }

    /// Dragging -> Idle. Returns false if no drag was in progress.
    pub fn release(&self, state: &mut LayoutState) -> bool {
        match state.drag() {
            Some(session) => {
                tracing::debug!("Drag ended on splitter {}", session.splitter);
                state.set_drag(None);
                true
            }
            None => false,
        }
    }
}
