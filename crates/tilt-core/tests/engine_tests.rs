// Host-side integration tests driving the engine through a scripted platform.

use glam::Vec2;
use tilt_core::*;

#[derive(Default)]
struct ScriptedPlatform {
    geometry: SurfaceGeometry,
    next_handle: DeferredHandle,
    frame: Option<DeferredHandle>,
    frames_requested: usize,
    frames_cancelled: usize,
    timers: Vec<(DeferredHandle, TimerKind, u32)>,
}

impl Platform for ScriptedPlatform {
    fn measure_surface(&self) -> SurfaceGeometry {
        self.geometry
    }
    fn request_frame(&mut self) -> DeferredHandle {
        assert!(self.frame.is_none(), "frame requested while one is pending");
        self.next_handle += 1;
        self.frames_requested += 1;
        self.frame = Some(self.next_handle);
        self.next_handle
    }
    fn cancel_frame(&mut self, handle: DeferredHandle) {
        assert_eq!(self.frame, Some(handle));
        self.frame = None;
        self.frames_cancelled += 1;
    }
    fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> DeferredHandle {
        self.next_handle += 1;
        self.timers.push((self.next_handle, kind, delay_ms));
        self.next_handle
    }
    fn clear_timer(&mut self, handle: DeferredHandle) {
        self.timers.retain(|(h, _, _)| *h != handle);
    }
}

#[derive(Default)]
struct RecordingSink {
    writes: Vec<VisualParams>,
}

impl ParamSink for RecordingSink {
    fn write(&mut self, params: &VisualParams) {
        self.writes.push(*params);
    }
}

type Engine = TiltEngine<ScriptedPlatform, RecordingSink>;

fn engine_with(geometry: SurfaceGeometry) -> Engine {
    let platform = ScriptedPlatform {
        geometry,
        ..Default::default()
    };
    TiltEngine::new(platform, RecordingSink::default(), TiltConfig::default())
}

fn card() -> Engine {
    engine_with(SurfaceGeometry::new(0.0, 0.0, 400.0, 200.0))
}

/// Run the pending animation frame, as the host would at the next vsync.
fn vsync(e: &mut Engine) {
    if e.platform_mut().frame.take().is_some() {
        e.run_frame();
    }
}

fn timer_pending(e: &Engine, kind: TimerKind) -> Option<u32> {
    e.platform()
        .timers
        .iter()
        .find(|(_, k, _)| *k == kind)
        .map(|(_, _, d)| *d)
}

/// Fire the pending timer of `kind`, as the host would once it elapses.
fn elapse(e: &mut Engine, kind: TimerKind) {
    let before = e.platform().timers.len();
    e.platform_mut().timers.retain(|(_, k, _)| *k != kind);
    if e.platform().timers.len() != before {
        e.timer_fired(kind);
    }
}

fn writes(e: &Engine) -> &[VisualParams] {
    &e.sink().writes
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn hover_quarter_point_end_to_end() {
    let mut e = card();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    assert!(writes(&e).is_empty(), "hover must wait for the frame");
    vsync(&mut e);
    let p = *writes(&e).last().unwrap();
    assert!(close(p.rotate_x, 5.0) && close(p.rotate_y, 5.0));
    assert!(close(p.translate_x, -7.5) && close(p.translate_y, 7.5));
    assert!(close(p.highlight_x, 75.0) && close(p.highlight_y, 25.0));
}

#[test]
fn hover_at_center_of_offset_surface_is_neutral() {
    let mut e = engine_with(SurfaceGeometry::new(100.0, 60.0, 300.0, 420.0));
    e.pointer_enter(Vec2::new(250.0, 270.0));
    vsync(&mut e);
    assert_eq!(e.params(), VisualParams::NEUTRAL);
}

#[test]
fn samples_within_one_frame_coalesce_into_one_write() {
    let mut e = card();
    e.pointer_enter(Vec2::new(10.0, 10.0));
    for i in 0..50 {
        e.pointer_move(Vec2::new(10.0 + i as f32, 20.0));
    }
    e.pointer_move(Vec2::new(300.0, 50.0));
    assert_eq!(e.platform().frames_requested, 52);
    assert_eq!(e.platform().frames_cancelled, 51);
    vsync(&mut e);
    assert_eq!(writes(&e).len(), 1);
    assert!(close(writes(&e)[0].highlight_x, 75.0));
    // nothing left to run
    vsync(&mut e);
    assert_eq!(writes(&e).len(), 1);
}

#[test]
fn leave_resets_synchronously_and_drops_pending_frame() {
    let mut e = card();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    e.pointer_move(Vec2::new(390.0, 190.0));
    e.pointer_leave();
    assert_eq!(e.params(), VisualParams::NEUTRAL);
    assert!(!e.frame_pending());
    assert_eq!(e.mode(), Mode::Idle);
}

#[test]
fn drag_rotation_accumulates_from_anchor() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(e.drag_rotation(), Some(DragRotation::ZERO));
    e.pointer_move(Vec2::new(140.0, 100.0));
    let rot = e.drag_rotation().unwrap();
    assert!(close(rot.rotate_y, 2.0));
    assert!(close(rot.rotate_x, 0.0));
    vsync(&mut e);
    let p = e.params();
    assert!(close(p.rotate_y, 2.0));
    assert!(close(p.translate_x, -1.0));
    assert!(close(p.highlight_x, 35.0));
}

#[test]
fn drag_rotation_never_leaves_limit() {
    let mut e = card();
    e.pointer_down(Vec2::new(200.0, 100.0));
    let wild = [
        Vec2::new(1e7, -1e7),
        Vec2::new(-1e7, 1e7),
        Vec2::new(4e6, 3e6),
        Vec2::new(-5.0, 9e9),
    ];
    for p in wild.iter().cycle().take(40) {
        e.pointer_move(*p);
        let r = e.drag_rotation().unwrap();
        assert!((-30.0..=30.0).contains(&r.rotate_x));
        assert!((-30.0..=30.0).contains(&r.rotate_y));
        vsync(&mut e);
        assert!((-30.0..=30.0).contains(&e.params().rotate_x));
        assert!((-30.0..=30.0).contains(&e.params().rotate_y));
    }
}

#[test]
fn new_drag_session_starts_from_zero() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(300.0, 100.0));
    e.pointer_up(Vec2::new(500.0, 100.0));
    e.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(e.drag_rotation(), Some(DragRotation::ZERO));
}

#[test]
fn release_outside_resets_without_grace() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(200.0, 150.0));
    vsync(&mut e);
    assert!(!e.params().is_neutral());
    e.pointer_up(Vec2::new(-20.0, 150.0));
    assert_eq!(e.params(), VisualParams::NEUTRAL);
    assert_eq!(timer_pending(&e, TimerKind::ReleaseGrace), None);
    assert_eq!(e.mode(), Mode::Idle);
}

#[test]
fn release_inside_resets_after_grace() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(200.0, 150.0));
    vsync(&mut e);
    e.pointer_up(Vec2::new(200.0, 150.0));
    assert_eq!(timer_pending(&e, TimerKind::ReleaseGrace), Some(100));
    assert!(!e.params().is_neutral(), "output held during grace");
    elapse(&mut e, TimerKind::ReleaseGrace);
    assert_eq!(e.params(), VisualParams::NEUTRAL);
    assert!(matches!(e.mode(), Mode::Hovering { .. }));
}

#[test]
fn new_drag_cancels_pending_grace_reset() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(200.0, 150.0));
    vsync(&mut e);
    e.pointer_up(Vec2::new(200.0, 150.0));
    let held = e.params();
    e.pointer_down(Vec2::new(200.0, 150.0));
    assert_eq!(timer_pending(&e, TimerKind::ReleaseGrace), None);
    // a late firing of the cancelled timer is a no-op
    e.timer_fired(TimerKind::ReleaseGrace);
    assert_eq!(e.params(), held);
    assert!(matches!(e.mode(), Mode::Dragging(_)));
}

#[test]
fn hover_movement_during_grace_takes_over() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(200.0, 150.0));
    e.pointer_up(Vec2::new(200.0, 150.0));
    e.pointer_move(Vec2::new(300.0, 50.0));
    assert!(!e.reset_pending());
    vsync(&mut e);
    assert!(close(e.params().highlight_x, 75.0));
}

#[test]
fn reset_is_idempotent() {
    let mut e = card();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    e.reset();
    let once = e.params();
    e.reset();
    assert_eq!(e.params(), once);
    assert_eq!(once, VisualParams::NEUTRAL);
}

#[test]
fn unlaid_surface_holds_previous_output_until_resize() {
    let mut e = engine_with(SurfaceGeometry::new(0.0, 0.0, 0.0, 0.0));
    e.pointer_enter(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    assert!(writes(&e).is_empty());

    e.platform_mut().geometry = SurfaceGeometry::new(0.0, 0.0, 400.0, 200.0);
    e.resize();
    e.pointer_move(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    assert!(close(e.params().rotate_x, 5.0));
}

#[test]
fn geometry_is_refreshed_on_session_start_only() {
    let mut e = card();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    // layout shifts mid-session: cached rect keeps being used
    e.platform_mut().geometry = SurfaceGeometry::new(100.0, 0.0, 400.0, 200.0);
    e.pointer_move(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    assert!(close(e.params().highlight_x, 75.0));
    e.pointer_leave();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    vsync(&mut e);
    assert!(close(e.params().highlight_x, 50.0));
}

fn tilting_engine() -> Engine {
    let mut e = card();
    e.orientation_support(Support::Available).unwrap();
    e
}

#[test]
fn tilt_drives_output_within_limits() {
    let mut e = tilting_engine();
    for (beta, gamma) in [(170.0, 85.0), (-180.0, -90.0), (12.0, -6.0)] {
        e.orientation(beta, gamma);
        vsync(&mut e);
        let p = e.params();
        assert!((-20.0..=20.0).contains(&p.rotate_x));
        assert!((-20.0..=20.0).contains(&p.rotate_y));
        assert!((0.0..=100.0).contains(&p.highlight_x));
        assert!((0.0..=100.0).contains(&p.highlight_y));
    }
    assert!(matches!(e.mode(), Mode::Accelerometer { .. }));
    let p = e.params();
    assert!(close(p.rotate_x, 6.0) && close(p.rotate_y, -3.0));
}

#[test]
fn touch_suppresses_tilt_until_resume_delay() {
    let mut e = tilting_engine();
    e.orientation(20.0, 0.0);
    vsync(&mut e);

    e.touch_start(Some(Vec2::new(100.0, 100.0)));
    assert!(e.orientation_suppressed());
    e.orientation(40.0, 0.0);
    assert!(!e.frame_pending());

    e.touch_end(Some(Vec2::new(100.0, 100.0)));
    assert_eq!(timer_pending(&e, TimerKind::OrientationResume), Some(500));
    elapse(&mut e, TimerKind::ReleaseGrace);
    e.orientation(40.0, 0.0);
    assert!(!e.frame_pending(), "still suppressed before resume");
    assert_eq!(e.params(), VisualParams::NEUTRAL);

    elapse(&mut e, TimerKind::OrientationResume);
    e.orientation(40.0, 0.0);
    vsync(&mut e);
    assert!(close(e.params().rotate_x, 20.0));
}

#[test]
fn second_touch_restarts_resume_window() {
    let mut e = tilting_engine();
    e.touch_start(Some(Vec2::new(10.0, 10.0)));
    e.touch_end(Some(Vec2::new(10.0, 10.0)));
    e.touch_start(Some(Vec2::new(10.0, 10.0)));
    assert_eq!(timer_pending(&e, TimerKind::OrientationResume), None);
    e.timer_fired(TimerKind::OrientationResume);
    assert!(e.orientation_suppressed());
}

#[test]
fn malformed_touch_samples_are_discarded() {
    let mut e = card();
    e.touch_start(Some(Vec2::new(100.0, 100.0)));
    e.touch_move(None);
    assert!(!e.frame_pending());
    assert_eq!(e.drag_rotation(), Some(DragRotation::ZERO));
    e.touch_move(Some(Vec2::new(140.0, 100.0)));
    assert!(e.frame_pending());
    // no release point: treated as leaving the surface
    e.touch_end(None);
    assert_eq!(e.params(), VisualParams::NEUTRAL);
    assert_eq!(e.mode(), Mode::Idle);
}

#[test]
fn hover_beats_tilt_and_drag_beats_both() {
    let mut e = tilting_engine();
    e.pointer_enter(Vec2::new(300.0, 50.0));
    e.orientation(30.0, 30.0);
    vsync(&mut e);
    assert!(close(e.params().highlight_x, 75.0));
    e.pointer_down(Vec2::new(300.0, 50.0));
    e.orientation(30.0, 30.0);
    assert!(!e.frame_pending());
    assert!(matches!(e.mode(), Mode::Dragging(_)));
}

#[test]
fn consent_flow_gates_tilt() {
    let mut e = card();
    e.orientation_support(Support::NeedsPermission).unwrap();
    assert!(e.needs_activation());
    e.orientation(10.0, 10.0);
    assert!(!e.frame_pending());
    e.begin_activation().unwrap();
    e.activation_result(Permission::Granted).unwrap();
    e.orientation(10.0, 10.0);
    assert!(e.frame_pending());
}

#[test]
fn denied_consent_leaves_tilt_off() {
    let mut e = card();
    e.orientation_support(Support::NeedsPermission).unwrap();
    e.begin_activation().unwrap();
    assert_eq!(
        e.activation_result(Permission::Denied),
        Err(TiltError::PermissionDenied)
    );
    assert!(!e.needs_activation());
    e.orientation(10.0, 10.0);
    assert!(!e.frame_pending());
    assert_eq!(e.mode(), Mode::Idle);
}

#[test]
fn unsupported_platform_never_tilts() {
    let mut e = card();
    assert!(e.orientation_support(Support::Unsupported).is_err());
    e.orientation(10.0, 10.0);
    assert!(!e.frame_pending());
}

#[test]
fn click_detection_follows_drag_peak() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(101.0, 100.0));
    e.pointer_up(Vec2::new(101.0, 100.0));
    assert!(e.last_press_was_click());

    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(200.0, 100.0));
    e.pointer_move(Vec2::new(100.0, 100.0));
    e.pointer_up(Vec2::new(100.0, 100.0));
    assert!(!e.last_press_was_click(), "returning to start is still a drag");
}

#[test]
fn mouse_press_remeasures_resized_surface() {
    let mut e = card();
    e.pointer_enter(Vec2::new(100.0, 100.0));
    vsync(&mut e);
    e.pointer_leave();
    // layout changed without a resize event; the press must not reuse the old rect
    e.platform_mut().geometry = SurfaceGeometry::new(0.0, 0.0, 200.0, 100.0);
    e.pointer_down(Vec2::new(50.0, 50.0));
    e.pointer_move(Vec2::new(70.0, 50.0));
    let rot = e.drag_rotation().unwrap();
    assert!(close(rot.rotate_y, 2.0));
}

#[test]
fn touch_start_remeasures_resized_surface() {
    let mut e = card();
    e.touch_start(Some(Vec2::new(100.0, 100.0)));
    e.touch_end(Some(Vec2::new(100.0, 100.0)));
    e.platform_mut().geometry = SurfaceGeometry::new(0.0, 0.0, 200.0, 100.0);
    e.touch_start(Some(Vec2::new(50.0, 50.0)));
    e.touch_move(Some(Vec2::new(50.0, 60.0)));
    let rot = e.drag_rotation().unwrap();
    assert!(close(rot.rotate_x, -2.0));
    assert!(close(rot.rotate_y, 0.0));
}

#[test]
fn pointless_touch_does_not_inherit_previous_drag() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(300.0, 100.0));
    e.pointer_up(Vec2::new(300.0, 100.0));
    assert!(!e.last_press_was_click());

    e.touch_start(None);
    e.touch_end(None);
    assert!(e.last_press_was_click());
}

#[test]
fn new_press_forgets_previous_drag_peak() {
    let mut e = card();
    e.pointer_down(Vec2::new(100.0, 100.0));
    e.pointer_move(Vec2::new(300.0, 100.0));
    e.pointer_up(Vec2::new(300.0, 100.0));
    e.pointer_down(Vec2::new(100.0, 100.0));
    assert!(e.last_press_was_click(), "nothing has moved in this press yet");
}
