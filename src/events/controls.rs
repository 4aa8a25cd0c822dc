use crate::card::SharedEngine;
use crate::constants::HOLO_SWITCH_ID;
use crate::dom;
use crate::style::{self, Toggle, ACTIVE_CLASS, FLIPPED_CLASS, ITEM_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_active_item(group: &web::Element, active: &web::Element) {
    if let Ok(items) = group.query_selector_all(&format!(".{}", ITEM_CLASS)) {
        for i in 0..items.length() {
            if let Some(el) = items.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }
    _ = active.class_list().add_1(ACTIVE_CLASS);
}

fn apply_toggle(document: &web::Document, toggle: Toggle, value: &str) {
    let Ok(Some(target)) = document.query_selector(toggle.target_selector()) else {
        return;
    };
    let cl = target.class_list();
    for class in toggle.managed_classes() {
        _ = cl.remove_1(class);
    }
    if let Some(class) = toggle.class_for(value) {
        _ = cl.add_1(class);
    }
    log::debug!("[style] {:?} = {}", toggle, value);
}

fn wire_toggle_group(document: &web::Document, toggle: Toggle) {
    let Ok(Some(group)) = document.query_selector(toggle.group_selector()) else {
        return;
    };
    let doc = document.clone();
    let group_cb = group.clone();
    dom::listen(&group, "click", move |ev: web::Event| {
        let Some(item) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if !item.class_list().contains(ITEM_CLASS) {
            return;
        }
        set_active_item(&group_cb, &item);
        let value = item
            .get_attribute(toggle.value_attribute())
            .unwrap_or_default();
        apply_toggle(&doc, toggle, &value);
    });
}

fn wire_holo_switch(document: &web::Document) {
    let Some(switch) = document
        .get_element_by_id(HOLO_SWITCH_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let switch_cb = switch.clone();
    dom::listen(&switch, "change", move |_: web::Event| {
        let Ok(Some(card)) = doc.query_selector(".card") else {
            return;
        };
        let cl = card.class_list();
        match style::holo_switch_class(switch_cb.checked()) {
            Some(class) => {
                _ = cl.add_1(class);
            }
            None => {
                _ = cl.remove_1(style::HOLO_DISABLED_CLASS);
            }
        }
    });
}

/// Flip the card unless the press that just ended was a real drag.
pub fn flip_if_click(engine: &SharedEngine, card: &web::Element) {
    if engine.borrow().last_press_was_click() {
        _ = card.class_list().toggle(FLIPPED_CLASS);
    }
}

pub fn wire_controls(engine: &SharedEngine, document: &web::Document, card: &web::HtmlElement) {
    for toggle in Toggle::ALL {
        wire_toggle_group(document, toggle);
    }
    wire_holo_switch(document);

    let e = engine.clone();
    let card_el: web::Element = card.clone().into();
    dom::listen(card, "click", move |_: web::MouseEvent| {
        flip_if_click(&e, &card_el);
    });
}
