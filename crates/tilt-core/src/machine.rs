//! Interaction mode state machine.
//!
//! One tagged mode decides which input source owns the transform. Each
//! transition method mutates the mode and returns the `Action` the engine
//! should take; the machine itself never touches the platform or the sink.
//!
//! Precedence: a drag always wins, hovering beats device tilt, and tilt only
//! drives output from `Idle` (or while it already owns `Accelerometer`).

use crate::geometry::SurfaceGeometry;
use crate::transform::{self, DragRotation, Tilt, TiltConfig};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// State of one continuous drag, press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: InputSource,
    /// Position of the previous sample; deltas are frame to frame.
    pub anchor: Vec2,
    pub rotation: DragRotation,
    /// Largest rotation reached during the session, used to tell clicks from drags.
    pub peak: f32,
}

impl DragSession {
    fn start(source: InputSource, at: Vec2) -> Self {
        Self {
            source,
            anchor: at,
            rotation: DragRotation::ZERO,
            peak: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Hovering {
        pointer: Vec2,
    },
    Dragging(DragSession),
    Accelerometer {
        tilt: Tilt,
    },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Hovering { .. } => "hovering",
            Mode::Dragging(_) => "dragging",
            Mode::Accelerometer { .. } => "accelerometer",
        }
    }
}

/// Input to the transform computation for the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Hover(Vec2),
    Drag {
        pointer: Vec2,
        rotation: DragRotation,
    },
    Tilt(Tilt),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Ignore,
    /// Schedule a frame computing output from this sample.
    Render(Sample),
    /// Reset output to neutral now.
    Reset,
    /// Reset output to neutral once the release grace window elapses.
    ResetAfterGrace,
}

#[derive(Debug, Default)]
pub struct InteractionMachine {
    mode: Mode,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.mode {
            Mode::Dragging(s) => Some(s),
            _ => None,
        }
    }

    fn set(&mut self, next: Mode) {
        if std::mem::discriminant(&self.mode) != std::mem::discriminant(&next) {
            log::debug!("[tilt] {} -> {}", self.mode.name(), next.name());
        }
        self.mode = next;
    }

    pub fn pointer_enter(&mut self, pointer: Vec2) -> Action {
        match self.mode {
            Mode::Dragging(_) => Action::Ignore,
            _ => {
                self.set(Mode::Hovering { pointer });
                Action::Render(Sample::Hover(pointer))
            }
        }
    }

    pub fn pointer_leave(&mut self) -> Action {
        match self.mode {
            Mode::Hovering { .. } => {
                self.set(Mode::Idle);
                Action::Reset
            }
            _ => Action::Ignore,
        }
    }

    pub fn hover_move(&mut self, pointer: Vec2) -> Action {
        match self.mode {
            Mode::Hovering { .. } => {
                self.mode = Mode::Hovering { pointer };
                Action::Render(Sample::Hover(pointer))
            }
            _ => Action::Ignore,
        }
    }

    /// Start a drag session. Any other mode is pre-empted; a second press
    /// while already dragging is ignored.
    pub fn press(&mut self, at: Vec2, source: InputSource) -> Action {
        if let Mode::Dragging(_) = self.mode {
            return Action::Ignore;
        }
        self.set(Mode::Dragging(DragSession::start(source, at)));
        Action::Ignore
    }

    /// Fold one drag sample into the accumulator.
    pub fn drag_move(
        &mut self,
        cfg: &TiltConfig,
        geom: &SurfaceGeometry,
        pointer: Vec2,
        source: InputSource,
    ) -> Action {
        let Mode::Dragging(session) = &mut self.mode else {
            return Action::Ignore;
        };
        if session.source != source {
            return Action::Ignore;
        }
        let Some(delta) = transform::drag_delta(cfg, geom, session.anchor, pointer) else {
            return Action::Ignore;
        };
        session
            .rotation
            .accumulate(delta, cfg.drag_rotate_limit_deg);
        session.peak = session.peak.max(session.rotation.magnitude());
        session.anchor = pointer;
        Action::Render(Sample::Drag {
            pointer,
            rotation: session.rotation,
        })
    }

    /// End the drag owned by `source`. A release away from the surface resets
    /// at once; a release over it waits out the grace window.
    pub fn release(
        &mut self,
        geom: &SurfaceGeometry,
        at: Option<Vec2>,
        source: InputSource,
    ) -> Action {
        match self.mode {
            Mode::Dragging(s) if s.source == source => {}
            _ => return Action::Ignore,
        }
        match at.filter(|p| geom.contains(*p)) {
            Some(pointer) => {
                let next = match source {
                    InputSource::Mouse => Mode::Hovering { pointer },
                    InputSource::Touch => Mode::Idle,
                };
                self.set(next);
                Action::ResetAfterGrace
            }
            None => {
                self.set(Mode::Idle);
                Action::Reset
            }
        }
    }

    /// A device-tilt sample. `accepted` is false while the adapter is
    /// inactive or suppressed.
    pub fn orientation(&mut self, tilt: Tilt, accepted: bool) -> Action {
        if !accepted {
            return Action::Ignore;
        }
        match self.mode {
            Mode::Idle | Mode::Accelerometer { .. } => {
                self.set(Mode::Accelerometer { tilt });
                Action::Render(Sample::Tilt(tilt))
            }
            _ => Action::Ignore,
        }
    }
}
