// ABOUTME: Resizable split layout engine.
// ABOUTME: Sizes a row or column of panes, handles splitter drags and rescales on container resize.

pub mod constraint;
pub mod drag;
mod engine;
pub mod geometry;
pub mod host;
pub mod notify;
pub mod reflow;
pub mod size;
pub mod state;

pub use constraint::{ConstraintPolicy, FALLBACK_MIN_SIZE};
pub use drag::{DragController, DragOutcome, DragPhase, DragSession};
pub use engine::SplitLayout;
pub use geometry::{Geometry, PaneGeometry, Rect, SplitterGeometry, SplitterState};
pub use host::{FrameId, Host, QueueHost, Subscription};
pub use notify::{ChangeNotifier, SizeListener, SizeReport};
pub use reflow::ReflowController;
pub use size::SizeModel;
pub use state::{LayoutState, Pane};
