// ABOUTME: Services the engine needs from its hosting environment.
// ABOUTME: Frame scheduling and pointer subscriptions, plus an in-memory queue implementation.

use std::collections::VecDeque;

/// Handle for a scheduled layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Handle for a live pointer move/release subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub u64);

/// The environment a layout runs in.
///
/// Work is never done on a background thread: the host calls back into the
/// layout with the frame id it handed out once that frame comes due.
pub trait Host {
    /// Schedule a layout pass for the next frame
    fn request_frame(&mut self) -> FrameId;

    /// Drop a scheduled pass that hasn't run yet
    fn cancel_frame(&mut self, frame: FrameId);

    /// Start delivering pointer move/release events to the layout
    fn subscribe_pointer(&mut self) -> Subscription;

    fn unsubscribe_pointer(&mut self, subscription: Subscription);
}

/// Host that queues frames in memory; the owner pumps them explicitly.
#[derive(Debug, Default)]
pub struct QueueHost {
    next_id: u64,
    frames: VecDeque<FrameId>,
    subscriptions: Vec<Subscription>,
}

impl QueueHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Take the oldest due frame
    pub fn next_frame(&mut self) -> Option<FrameId> {
        self.frames.pop_front()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Host for QueueHost {
    fn request_frame(&mut self) -> FrameId {
        let frame = FrameId(self.allocate());
        self.frames.push_back(frame);
        frame
    }

    fn cancel_frame(&mut self, frame: FrameId) {
        self.frames.retain(|f| *f != frame);
    }

    fn subscribe_pointer(&mut self) -> Subscription {
        let subscription = Subscription(self.allocate());
        self.subscriptions.push(subscription);
        subscription
    }

    fn unsubscribe_pointer(&mut self, subscription: Subscription) {
        self.subscriptions.retain(|s| *s != subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_run_in_request_order() {
        let mut host = QueueHost::new();
        let a = host.request_frame();
        let b = host.request_frame();
        assert_ne!(a, b);
        assert_eq!(host.next_frame(), Some(a));
        assert_eq!(host.next_frame(), Some(b));
        assert_eq!(host.next_frame(), None);
    }

    #[test]
    fn cancelled_frame_never_comes_due() {
        let mut host = QueueHost::new();
        let a = host.request_frame();
        let b = host.request_frame();
        host.cancel_frame(a);
        assert_eq!(host.pending_frames(), 1);
        assert_eq!(host.next_frame(), Some(b));
    }

    #[test]
    fn subscriptions_are_tracked() {
        let mut host = QueueHost::new();
        let sub = host.subscribe_pointer();
        assert_eq!(host.live_subscriptions(), 1);
        host.unsubscribe_pointer(sub);
        assert_eq!(host.live_subscriptions(), 0);
    }
}
