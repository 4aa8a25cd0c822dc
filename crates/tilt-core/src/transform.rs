//! Pure mappings from an input sample to the visual parameter set.
//!
//! Nothing here holds state. Hover and drag mappings need a valid surface
//! geometry and return `None` otherwise so callers keep their previous output.

use crate::constants::*;
use crate::geometry::SurfaceGeometry;
use crate::params::VisualParams;
use glam::Vec2;

/// Rotation accumulated over a single drag session, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragRotation {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl DragRotation {
    pub const ZERO: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Add a delta and clamp both axes to the drag limit.
    pub fn accumulate(&mut self, delta: DragRotation, limit: f32) {
        self.rotate_x = (self.rotate_x + delta.rotate_x).clamp(-limit, limit);
        self.rotate_y = (self.rotate_y + delta.rotate_y).clamp(-limit, limit);
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.rotate_x.abs().max(self.rotate_y.abs())
    }
}

/// Device tilt in degrees as reported by the platform.
///
/// `beta` is front-back (nominally -180..180), `gamma` left-right (-90..90).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub beta: f32,
    pub gamma: f32,
}

/// Gains used by the mappings; defaults come from `constants`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub hover_rotate_deg: f32,
    pub hover_translate_px: f32,
    pub drag_rotate_per_surface: f32,
    pub drag_rotate_limit_deg: f32,
    pub drag_translate_ratio: f32,
    pub tilt_scale: f32,
    pub tilt_rotate_limit_deg: f32,
    pub tilt_highlight_gain: f32,
    pub release_grace_ms: u32,
    pub orientation_resume_ms: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            hover_rotate_deg: HOVER_ROTATE_DEG,
            hover_translate_px: HOVER_TRANSLATE_PX,
            drag_rotate_per_surface: DRAG_ROTATE_PER_SURFACE,
            drag_rotate_limit_deg: DRAG_ROTATE_LIMIT_DEG,
            drag_translate_ratio: DRAG_TRANSLATE_RATIO,
            tilt_scale: TILT_SCALE,
            tilt_rotate_limit_deg: TILT_ROTATE_LIMIT_DEG,
            tilt_highlight_gain: TILT_HIGHLIGHT_GAIN,
            release_grace_ms: DRAG_RELEASE_GRACE_MS,
            orientation_resume_ms: ORIENTATION_RESUME_MS,
        }
    }
}

/// Highlight sweep: 0% at the left/top edge, 100% at the right/bottom edge.
#[inline]
fn highlight(geom: &SurfaceGeometry, local: Vec2) -> (f32, f32) {
    (
        local.x / geom.width * HIGHLIGHT_MAX_PCT,
        local.y / geom.height * HIGHLIGHT_MAX_PCT,
    )
}

/// Pointer position normalized to [-1, 1] around the surface center.
#[inline]
pub fn normalized(geom: &SurfaceGeometry, client: Vec2) -> Vec2 {
    let half = geom.size() * 0.5;
    (geom.local(client) - half) / half
}

pub fn hover(cfg: &TiltConfig, geom: &SurfaceGeometry, client: Vec2) -> Option<VisualParams> {
    if !geom.is_valid() {
        return None;
    }
    let n = normalized(geom, client);
    let (highlight_x, highlight_y) = highlight(geom, geom.local(client));
    Some(VisualParams {
        rotate_x: n.y * -cfg.hover_rotate_deg,
        rotate_y: n.x * cfg.hover_rotate_deg,
        translate_x: n.x * -cfg.hover_translate_px,
        translate_y: n.y * -cfg.hover_translate_px,
        highlight_x,
        highlight_y,
    })
}

/// Rotation delta for pointer travel from `from` to `to`.
///
/// Travel is measured in surface fractions, so a drag across the full width
/// turns the surface by `drag_rotate_per_surface` degrees.
pub fn drag_delta(
    cfg: &TiltConfig,
    geom: &SurfaceGeometry,
    from: Vec2,
    to: Vec2,
) -> Option<DragRotation> {
    if !geom.is_valid() {
        return None;
    }
    let d = (to - from) / geom.size();
    Some(DragRotation {
        rotate_x: -d.y * cfg.drag_rotate_per_surface,
        rotate_y: d.x * cfg.drag_rotate_per_surface,
    })
}

pub fn drag(
    cfg: &TiltConfig,
    geom: &SurfaceGeometry,
    client: Vec2,
    rot: DragRotation,
) -> Option<VisualParams> {
    if !geom.is_valid() {
        return None;
    }
    let (highlight_x, highlight_y) = highlight(geom, geom.local(client));
    Some(VisualParams {
        rotate_x: rot.rotate_x,
        rotate_y: rot.rotate_y,
        translate_x: rot.rotate_y * -cfg.drag_translate_ratio,
        translate_y: rot.rotate_x * cfg.drag_translate_ratio,
        highlight_x,
        highlight_y,
    })
}

/// Device tilt mapping. Independent of surface geometry; translation stays
/// at rest in this mode.
pub fn tilt(cfg: &TiltConfig, t: Tilt) -> VisualParams {
    let limit = cfg.tilt_rotate_limit_deg;
    let rotate_x = (t.beta * cfg.tilt_scale).clamp(-limit, limit);
    let rotate_y = (t.gamma * cfg.tilt_scale).clamp(-limit, limit);
    let sweep = |v: f32| v.clamp(0.0, HIGHLIGHT_MAX_PCT);
    VisualParams {
        rotate_x,
        rotate_y,
        translate_x: 0.0,
        translate_y: 0.0,
        highlight_x: sweep(HIGHLIGHT_CENTER_PCT + rotate_y * cfg.tilt_highlight_gain),
        highlight_y: sweep(HIGHLIGHT_CENTER_PCT - rotate_x * cfg.tilt_highlight_gain),
    }
}
