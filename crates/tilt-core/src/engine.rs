//! The gesture-to-transform engine.
//!
//! `TiltEngine` owns every piece of mutable interaction state and is driven
//! from a single event-loop thread: raw input callbacks, the one scheduled
//! frame callback and the two one-shot timers all call into it in turn.
//! Nothing here is shared across threads, so nothing is locked.

use crate::constants::CLICK_SLOP_DEG;
use crate::error::TiltError;
use crate::geometry::{GeometryCache, SurfaceGeometry};
use crate::machine::{Action, InputSource, InteractionMachine, Mode, Sample};
use crate::orientation::{ActivationState, OrientationAdapter, Permission, Support};
use crate::params::VisualParams;
use crate::platform::{Deferred, ParamSink, Platform, TimerKind};
use crate::scheduler::FrameScheduler;
use crate::transform::{self, DragRotation, Tilt, TiltConfig};
use glam::Vec2;

pub struct TiltEngine<P: Platform, S: ParamSink> {
    platform: P,
    sink: S,
    config: TiltConfig,
    geometry: GeometryCache,
    machine: InteractionMachine,
    scheduler: FrameScheduler,
    pending: Option<Sample>,
    grace: Deferred,
    orientation: OrientationAdapter,
    output: VisualParams,
    last_drag_peak: Option<f32>,
}

impl<P: Platform, S: ParamSink> TiltEngine<P, S> {
    pub fn new(platform: P, sink: S, config: TiltConfig) -> Self {
        Self {
            platform,
            sink,
            config,
            geometry: GeometryCache::new(),
            machine: InteractionMachine::new(),
            scheduler: FrameScheduler::new(),
            pending: None,
            grace: Deferred::new(TimerKind::ReleaseGrace),
            orientation: OrientationAdapter::new(),
            output: VisualParams::NEUTRAL,
            last_drag_peak: None,
        }
    }

    // ---------------- accessors ----------------

    #[inline]
    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    /// Last parameter set written to the sink.
    #[inline]
    pub fn params(&self) -> VisualParams {
        self.output
    }

    pub fn drag_rotation(&self) -> Option<DragRotation> {
        self.machine.drag_session().map(|s| s.rotation)
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn orientation_state(&self) -> ActivationState {
        self.orientation.state()
    }

    pub fn orientation_suppressed(&self) -> bool {
        self.orientation.is_suppressed()
    }

    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn reset_pending(&self) -> bool {
        self.grace.is_pending()
    }

    /// True when the most recent mouse or touch press ended without turning
    /// the surface noticeably, i.e. it should be treated as a click.
    pub fn last_press_was_click(&self) -> bool {
        self.last_drag_peak
            .map_or(true, |peak| peak < CLICK_SLOP_DEG)
    }

    // ---------------- pointer ----------------

    pub fn pointer_enter(&mut self, at: Vec2) {
        if !matches!(self.mode(), Mode::Dragging(_)) {
            self.begin_session();
        }
        let action = self.machine.pointer_enter(at);
        self.apply(action);
    }

    /// Window-level pointer movement. Drives the hover mapping while hovering
    /// and the drag accumulator while a mouse drag is in progress.
    pub fn pointer_move(&mut self, at: Vec2) {
        let action = match self.mode() {
            Mode::Dragging(_) => self.drag_move(at, InputSource::Mouse),
            _ => self.machine.hover_move(at),
        };
        self.apply(action);
    }

    pub fn pointer_leave(&mut self) {
        let action = self.machine.pointer_leave();
        self.apply(action);
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.press(at, InputSource::Mouse);
    }

    /// Window-level release, so a drag that wandered off the surface still ends.
    pub fn pointer_up(&mut self, at: Vec2) {
        self.release(Some(at), InputSource::Mouse);
    }

    // ---------------- touch ----------------

    pub fn touch_start(&mut self, at: Option<Vec2>) {
        self.orientation.suppress(&mut self.platform);
        match at {
            Some(p) => self.press(p, InputSource::Touch),
            None => {
                if !matches!(self.mode(), Mode::Dragging(_)) {
                    self.last_drag_peak = None;
                }
                log::debug!("[touch] start discarded: {}", TiltError::MalformedSample);
            }
        }
    }

    pub fn touch_move(&mut self, at: Option<Vec2>) {
        let Some(p) = at else {
            log::debug!("[touch] move discarded: {}", TiltError::MalformedSample);
            return;
        };
        let action = self.drag_move(p, InputSource::Touch);
        self.apply(action);
    }

    /// Touch released. A missing release point counts as leaving the surface.
    pub fn touch_end(&mut self, at: Option<Vec2>) {
        self.release(at, InputSource::Touch);
        let delay = self.config.orientation_resume_ms;
        self.orientation.resume_after(&mut self.platform, delay);
    }

    // ---------------- device orientation ----------------

    pub fn orientation_support(&mut self, support: Support) -> Result<(), TiltError> {
        let res = self.orientation.detect(support);
        match &res {
            Ok(()) => log::info!("[tilt] orientation support: {:?}", support),
            Err(e) => log::info!("[tilt] {}", e),
        }
        res
    }

    #[inline]
    pub fn needs_activation(&self) -> bool {
        self.orientation.needs_activation()
    }

    /// First phase of the consent flow; call from inside a user-gesture handler
    /// right before issuing the platform permission request.
    pub fn begin_activation(&mut self) -> Result<(), TiltError> {
        self.orientation.begin_activation()
    }

    pub fn activation_result(&mut self, permission: Permission) -> Result<(), TiltError> {
        let res = self.orientation.finish_activation(permission);
        match &res {
            Ok(()) => log::info!("[tilt] orientation {:?}", self.orientation.state()),
            Err(e) => log::info!("[tilt] {}", e),
        }
        res
    }

    pub fn orientation(&mut self, beta: f32, gamma: f32) {
        if !beta.is_finite() || !gamma.is_finite() {
            log::trace!("[tilt] sample discarded: {}", TiltError::MalformedSample);
            return;
        }
        let accepted = self.orientation.accepts();
        let action = self.machine.orientation(Tilt { beta, gamma }, accepted);
        self.apply(action);
    }

    // ---------------- host callbacks ----------------

    pub fn resize(&mut self) {
        self.geometry.invalidate();
    }

    /// The frame requested by the scheduler came due.
    pub fn run_frame(&mut self) {
        if !self.scheduler.begin_frame() {
            return;
        }
        let Some(sample) = self.pending.take() else {
            return;
        };
        match self.compute(sample) {
            Ok(params) => self.emit(params),
            Err(e) => log::trace!("[tilt] frame skipped: {}", e),
        }
    }

    pub fn timer_fired(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::ReleaseGrace => {
                if self.grace.fire() {
                    self.reset();
                }
            }
            TimerKind::OrientationResume => {
                if self.orientation.resume_fired() {
                    log::debug!("[tilt] orientation resumed");
                }
            }
        }
    }

    /// Return to the rest position, dropping any pending frame or deferred reset.
    pub fn reset(&mut self) {
        self.scheduler.cancel(&mut self.platform);
        self.pending = None;
        self.grace.cancel(&mut self.platform);
        self.emit(VisualParams::NEUTRAL);
    }

    // ---------------- internals ----------------

    fn surface(&mut self) -> SurfaceGeometry {
        let platform = &self.platform;
        self.geometry.get_or_measure(|| platform.measure_surface())
    }

    /// New session: geometry is re-read and any deferred reset is dropped.
    fn begin_session(&mut self) {
        self.geometry.invalidate();
        self.grace.cancel(&mut self.platform);
    }

    fn press(&mut self, at: Vec2, source: InputSource) {
        if matches!(self.mode(), Mode::Dragging(_)) {
            return;
        }
        self.last_drag_peak = None;
        self.begin_session();
        self.surface();
        let action = self.machine.press(at, source);
        self.apply(action);
    }

    fn drag_move(&mut self, at: Vec2, source: InputSource) -> Action {
        let geom = self.surface();
        self.machine.drag_move(&self.config, &geom, at, source)
    }

    fn release(&mut self, at: Option<Vec2>, source: InputSource) {
        let Some(peak) = self
            .machine
            .drag_session()
            .filter(|s| s.source == source)
            .map(|s| s.peak)
        else {
            return;
        };
        self.last_drag_peak = Some(peak);
        let geom = self.surface();
        let action = self.machine.release(&geom, at, source);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Ignore => {}
            Action::Render(sample) => {
                // a fresh driving sample supersedes a pending release reset
                self.grace.cancel(&mut self.platform);
                self.pending = Some(sample);
                self.scheduler.schedule(&mut self.platform);
            }
            Action::Reset => self.reset(),
            Action::ResetAfterGrace => {
                let delay = self.config.release_grace_ms;
                self.grace.arm(&mut self.platform, delay);
            }
        }
    }

    fn compute(&mut self, sample: Sample) -> Result<VisualParams, TiltError> {
        let cfg = self.config;
        match sample {
            Sample::Tilt(t) => Ok(transform::tilt(&cfg, t)),
            Sample::Hover(p) => {
                let geom = self.surface();
                transform::hover(&cfg, &geom, p).ok_or(TiltError::InvalidGeometry)
            }
            Sample::Drag { pointer, rotation } => {
                let geom = self.surface();
                transform::drag(&cfg, &geom, pointer, rotation).ok_or(TiltError::InvalidGeometry)
            }
        }
    }

    fn emit(&mut self, params: VisualParams) {
        self.output = params;
        self.sink.write(&params);
    }
}
