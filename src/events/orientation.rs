use crate::card::SharedEngine;
use crate::constants::TILT_BUTTON_ID;
use crate::dom;
use js_sys::Reflect;
use tilt_core::{Permission, Support};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const EVENT_CTOR: &str = "DeviceOrientationEvent";
const REQUEST_PERMISSION: &str = "requestPermission";

fn orientation_ctor(window: &web::Window) -> JsValue {
    Reflect::get(window, &JsValue::from_str(EVENT_CTOR)).unwrap_or(JsValue::UNDEFINED)
}

/// Orientation events exist everywhere `DeviceOrientationEvent` does; a
/// static `requestPermission` on it means the user has to consent first.
pub fn detect_support(window: &web::Window) -> Support {
    let ctor = orientation_ctor(window);
    if ctor.is_undefined() {
        return Support::Unsupported;
    }
    let request = Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION))
        .unwrap_or(JsValue::UNDEFINED);
    if request.is_function() {
        Support::NeedsPermission
    } else {
        Support::Available
    }
}

/// Issue the platform permission request. Must run inside a user gesture.
fn request_permission(window: &web::Window) -> Result<js_sys::Promise, JsValue> {
    let ctor = orientation_ctor(window);
    let request: js_sys::Function =
        Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION))?.dyn_into()?;
    request.call0(&ctor)?.dyn_into::<js_sys::Promise>()
}

pub fn wire_orientation(engine: &SharedEngine, window: &web::Window, document: &web::Document) {
    let support = detect_support(window);
    if engine.borrow_mut().orientation_support(support).is_err() {
        return;
    }

    // Samples always flow in; the engine drops them until it is active.
    let e = engine.clone();
    dom::listen(window, "deviceorientation", move |ev: web::DeviceOrientationEvent| {
        let beta = ev.beta().map_or(f32::NAN, |v| v as f32);
        let gamma = ev.gamma().map_or(f32::NAN, |v| v as f32);
        e.borrow_mut().orientation(beta, gamma);
    });

    if engine.borrow().needs_activation() {
        wire_permission_button(engine, window, document);
    }
}

fn wire_permission_button(engine: &SharedEngine, window: &web::Window, document: &web::Document) {
    let Some(button) = document.get_element_by_id(TILT_BUTTON_ID) else {
        log::info!("[tilt] no #{} button; device tilt stays off", TILT_BUTTON_ID);
        return;
    };
    dom::set_hidden(&button, false);

    let e = engine.clone();
    let window = window.clone();
    let button_cb = button.clone();
    dom::listen(&button, "click", move |_: web::Event| {
        if let Err(err) = e.borrow_mut().begin_activation() {
            log::debug!("[tilt] activation skipped: {}", err);
            return;
        }
        let promise = match request_permission(&window) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("[tilt] requestPermission failed: {:?}", err);
                _ = e.borrow_mut().activation_result(Permission::Denied);
                dom::set_hidden(&button_cb, true);
                return;
            }
        };
        let e = e.clone();
        let button = button_cb.clone();
        spawn_local(async move {
            let permission = match JsFuture::from(promise).await {
                Ok(v) if v.as_string().as_deref() == Some("granted") => Permission::Granted,
                _ => Permission::Denied,
            };
            // a denial is final for this page; the button does not come back
            _ = e.borrow_mut().activation_result(permission);
            dom::set_hidden(&button, true);
        });
    });
}
