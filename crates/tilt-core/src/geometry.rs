//! Surface geometry as measured from the rendered card.

use glam::Vec2;

/// Client-space rectangle of the surface, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceGeometry {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface that has not been laid out yet reports a zero (or NaN) size.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Pointer position relative to the top-left corner of the surface.
    #[inline]
    pub fn local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }

    /// Inclusive hit test in client coordinates.
    pub fn contains(&self, client: Vec2) -> bool {
        let p = self.local(client);
        self.is_valid() && p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

/// Cached measurement that is re-read lazily after being invalidated.
///
/// Invalidation happens on viewport resize and whenever a new interaction
/// session starts; reads in between reuse the cached rectangle.
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    cached: Option<SurfaceGeometry>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[inline]
    pub fn is_stale(&self) -> bool {
        self.cached.is_none()
    }

    /// Return the cached geometry, measuring first if it is stale.
    ///
    /// An invalid (zero-sized) measurement is returned but not cached, so the
    /// next read measures again once layout has happened.
    pub fn get_or_measure(&mut self, measure: impl FnOnce() -> SurfaceGeometry) -> SurfaceGeometry {
        if let Some(g) = self.cached {
            return g;
        }
        let g = measure();
        if g.is_valid() {
            self.cached = Some(g);
        }
        g
    }
}
