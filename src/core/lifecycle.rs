// Per-mount frame-callback bookkeeping.
//
// Every mounted effect owns exactly one pending animation-frame callback at
// a time. Tracking that handle here, per mount rather than in any global
// registry, makes teardown exhaustive: shutdown cancels the pending frame
// and later fires are ignored.

/// Host-side frame queue (the browser's requestAnimationFrame in production).
pub trait FrameScheduler {
    /// Queue the effect's tick for the next frame; returns a cancel handle.
    fn request_frame(&mut self) -> i32;
    fn cancel_frame(&mut self, handle: i32);
}

#[derive(Debug, Default)]
pub struct EffectLifecycle {
    pending: Option<i32>,
    stopped: bool,
}

impl EffectLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the first frame. No-op when already running or shut down.
    pub fn begin(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.stopped || self.pending.is_some() {
            return;
        }
        self.pending = Some(scheduler.request_frame());
    }

    /// Call at the top of each fired frame. Returns `false` when the effect
    /// has been shut down and the tick must do no work; otherwise the next
    /// frame is queued.
    pub fn frame_fired(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        self.pending = None;
        if self.stopped {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Cancel any pending frame and refuse further scheduling. Idempotent.
    pub fn shutdown(&mut self, scheduler: &mut impl FrameScheduler) {
        self.stopped = true;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
