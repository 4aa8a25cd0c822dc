//! Per-frame coalescing of transform updates.

use crate::platform::{DeferredHandle, Platform};

/// Holds at most one pending frame request.
///
/// Scheduling while a request is pending cancels it and asks for a new one,
/// so however many samples arrive before a frame boundary, exactly one
/// computation runs and it sees the latest sample.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<DeferredHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn schedule<P: Platform>(&mut self, platform: &mut P) {
        self.cancel(platform);
        self.pending = Some(platform.request_frame());
    }

    pub fn cancel<P: Platform>(&mut self, platform: &mut P) {
        if let Some(h) = self.pending.take() {
            platform.cancel_frame(h);
        }
    }

    /// Called when the frame callback runs. Returns false if nothing was pending.
    pub fn begin_frame(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
