use tilt_core::{DeferredHandle, Platform, SurfaceGeometry, TimerKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// JS callbacks handed to `requestAnimationFrame` and `setTimeout`.
///
/// They are created once, after the engine exists, and reused for every
/// request so nothing is allocated per frame.
pub struct Callbacks {
    pub frame: Closure<dyn FnMut()>,
    pub release_grace: Closure<dyn FnMut()>,
    pub orientation_resume: Closure<dyn FnMut()>,
}

pub struct BrowserPlatform {
    window: web::Window,
    surface: web::Element,
    callbacks: Option<Callbacks>,
}

impl BrowserPlatform {
    pub fn new(window: web::Window, surface: web::Element) -> Self {
        Self {
            window,
            surface,
            callbacks: None,
        }
    }

    pub fn bind(&mut self, callbacks: Callbacks) {
        self.callbacks = Some(callbacks);
    }
}

impl Platform for BrowserPlatform {
    fn measure_surface(&self) -> SurfaceGeometry {
        let rect = self.surface.get_bounding_client_rect();
        SurfaceGeometry::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn request_frame(&mut self) -> DeferredHandle {
        let Some(cb) = &self.callbacks else {
            log::warn!("[frame] requested before callbacks were bound");
            return 0;
        };
        self.window
            .request_animation_frame(cb.frame.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                0
            })
    }

    fn cancel_frame(&mut self, handle: DeferredHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn set_timer(&mut self, kind: TimerKind, delay_ms: u32) -> DeferredHandle {
        let Some(cb) = &self.callbacks else {
            return 0;
        };
        let callback = match kind {
            TimerKind::ReleaseGrace => &cb.release_grace,
            TimerKind::OrientationResume => &cb.orientation_resume,
        };
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .unwrap_or_else(|e| {
                log::warn!("setTimeout failed: {:?}", e);
                0
            })
    }

    fn clear_timer(&mut self, handle: DeferredHandle) {
        self.window.clear_timeout_with_handle(handle);
    }
}
