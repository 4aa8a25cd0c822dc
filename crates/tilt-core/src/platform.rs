//! Seams between the engine and its host environment.

use crate::geometry::SurfaceGeometry;
use crate::params::VisualParams;

/// Write-only consumer of the engine output. Writes are fire-and-forget and
/// the last write wins.
pub trait ParamSink {
    fn write(&mut self, params: &VisualParams);
}

/// Handle returned by the host for a one-shot frame request or timer.
pub type DeferredHandle = i32;

/// The two kinds of one-shot timer the engine arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Delayed neutral reset after a drag released over the surface.
    ReleaseGrace,
    /// Delayed resumption of device-tilt output after a touch ends.
    OrientationResume,
}

/// Host services used by the engine.
///
/// Everything here is fire-once and non-blocking. When a requested frame or
/// timer comes due, the host calls back into the engine with
/// `TiltEngine::run_frame` or `TiltEngine::timer_fired` on the same thread.
pub trait Platform {
    /// Read the current client rectangle of the surface.
    fn measure_surface(&self) -> SurfaceGeometry;
    fn request_frame(&mut self) -> DeferredHandle;
    fn cancel_frame(&mut self, handle: DeferredHandle);
    fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> DeferredHandle;
    fn clear_timer(&mut self, handle: DeferredHandle);
}

/// A cancellable one-shot timer slot. Arming always cancels what was pending.
#[derive(Debug)]
pub struct Deferred {
    kind: TimerKind,
    pending: Option<DeferredHandle>,
}

impl Deferred {
    pub const fn new(kind: TimerKind) -> Self {
        Self {
            kind,
            pending: None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn arm<P: Platform>(&mut self, platform: &mut P, delay_ms: u32) {
        self.cancel(platform);
        self.pending = Some(platform.set_timer(self.kind, delay_ms));
    }

    pub fn cancel<P: Platform>(&mut self, platform: &mut P) {
        if let Some(h) = self.pending.take() {
            platform.clear_timer(h);
        }
    }

    /// Consume a firing. Returns false for a timer that was already cancelled.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
