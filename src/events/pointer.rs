use crate::card::SharedEngine;
use crate::dom;
use crate::touch::{TouchPoint, TouchStep, TouchTracker};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_point(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

#[inline]
fn pointer_point(ev: &web::PointerEvent) -> Vec2 {
    client_point(ev.client_x(), ev.client_y())
}

/// Touch pointers are handled by the touch listeners.
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

fn touch_points(list: &web::TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint {
            id: t.identifier(),
            at: client_point(t.client_x(), t.client_y()),
        })
        .collect()
}

fn apply_touch(engine: &SharedEngine, step: TouchStep) {
    let mut e = engine.borrow_mut();
    match step {
        TouchStep::Ignore => {}
        TouchStep::Start(at) => e.touch_start(at),
        TouchStep::Move(at) => e.touch_move(Some(at)),
        TouchStep::End(at) => e.touch_end(at),
    }
}

/// Hover and mouse drag. Enter/leave/down are card-scoped; move and up are
/// window-scoped so a drag keeps tracking after the pointer leaves the card.
pub fn wire_pointer(engine: &SharedEngine, card: &web::HtmlElement, window: &web::Window) {
    let e = engine.clone();
    dom::listen(card, "pointerenter", move |ev: web::PointerEvent| {
        if !is_touch(&ev) {
            e.borrow_mut().pointer_enter(pointer_point(&ev));
        }
    });

    let e = engine.clone();
    dom::listen(card, "pointerleave", move |ev: web::PointerEvent| {
        if !is_touch(&ev) {
            e.borrow_mut().pointer_leave();
        }
    });

    let e = engine.clone();
    dom::listen(card, "pointerdown", move |ev: web::PointerEvent| {
        if is_touch(&ev) || ev.button() != 0 {
            return;
        }
        e.borrow_mut().pointer_down(pointer_point(&ev));
        // keep the browser from starting a text selection or image drag
        ev.prevent_default();
    });

    let e = engine.clone();
    dom::listen(window, "pointermove", move |ev: web::PointerEvent| {
        if !is_touch(&ev) {
            e.borrow_mut().pointer_move(pointer_point(&ev));
        }
    });

    let e = engine.clone();
    dom::listen(window, "pointerup", move |ev: web::PointerEvent| {
        if !is_touch(&ev) {
            e.borrow_mut().pointer_up(pointer_point(&ev));
        }
    });
}

/// Touch drag on the card, owned by the first finger down. Listeners are
/// non-passive so page scrolling and selection stay off while a finger is on
/// the card.
pub fn wire_touch(engine: &SharedEngine, card: &web::HtmlElement) {
    let tracker = Rc::new(RefCell::new(TouchTracker::new()));

    let e = engine.clone();
    let t = tracker.clone();
    dom::listen_active(card, "touchstart", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let step = t.borrow_mut().start(&touch_points(&ev.changed_touches()));
        apply_touch(&e, step);
    });

    let e = engine.clone();
    let t = tracker.clone();
    dom::listen_active(card, "touchmove", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let step = t.borrow_mut().moved(&touch_points(&ev.changed_touches()));
        apply_touch(&e, step);
    });

    for name in ["touchend", "touchcancel"] {
        let e = engine.clone();
        let t = tracker.clone();
        let card_el: web::Element = card.clone().into();
        let cancelled = name == "touchcancel";
        dom::listen_active(card, name, move |ev: web::TouchEvent| {
            ev.prevent_default();
            let step = t.borrow_mut().end(
                &touch_points(&ev.changed_touches()),
                ev.touches().length(),
                cancelled,
            );
            if step == TouchStep::Ignore {
                return;
            }
            apply_touch(&e, step);
            if !cancelled {
                super::flip_if_click(&e, &card_el);
            }
        });
    }
}

pub fn wire_resize(engine: &SharedEngine, window: &web::Window) {
    let e = engine.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        e.borrow_mut().resize();
    });
}
