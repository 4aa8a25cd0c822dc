//! Finger ownership for touch drags.
//!
//! The first finger down owns the drag until it lifts; other fingers are
//! ignored. Pure so the matching can be tested on the host.

use glam::Vec2;

/// One entry of a touch list: platform identifier plus client position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub at: Vec2,
}

/// What the engine should be told about a touch event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchStep {
    Ignore,
    Start(Option<Vec2>),
    Move(Vec2),
    /// The owning finger lifted (or the last finger, if none owned the drag).
    End(Option<Vec2>),
}

#[derive(Debug, Default)]
pub struct TouchTracker {
    owner: Option<i32>,
    session: bool,
}

fn find(list: &[TouchPoint], id: i32) -> Option<Vec2> {
    list.iter().find(|t| t.id == id).map(|t| t.at)
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn owner(&self) -> Option<i32> {
        self.owner
    }

    /// `changed` holds the fingers that just landed.
    pub fn start(&mut self, changed: &[TouchPoint]) -> TouchStep {
        if self.session {
            return TouchStep::Ignore;
        }
        self.session = true;
        let first = changed.first();
        self.owner = first.map(|t| t.id);
        TouchStep::Start(first.map(|t| t.at))
    }

    /// `changed` holds the fingers that moved.
    pub fn moved(&mut self, changed: &[TouchPoint]) -> TouchStep {
        match self.owner.and_then(|id| find(changed, id)) {
            Some(at) => TouchStep::Move(at),
            None => TouchStep::Ignore,
        }
    }

    /// `changed` holds the fingers that lifted, `remaining` how many are
    /// still down. A cancelled touch ends without a release point.
    pub fn end(&mut self, changed: &[TouchPoint], remaining: u32, cancelled: bool) -> TouchStep {
        if !self.session {
            return TouchStep::Ignore;
        }
        let at = match self.owner {
            Some(id) => match find(changed, id) {
                Some(at) => Some(at),
                None => return TouchStep::Ignore,
            },
            // no owning finger: the session lasts until every finger is up
            None if remaining == 0 => None,
            None => return TouchStep::Ignore,
        };
        self.owner = None;
        self.session = false;
        TouchStep::End(if cancelled { None } else { at })
    }
}
