#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod events;
mod platform;
mod sink;
mod style;
mod touch;

use constants::CARD_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holo-card starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let card = dom::html_element_by_id(&document, CARD_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CARD_ID))?;

    let engine = card::mount(&window, &card);
    events::wire_pointer(&engine, &card, &window);
    events::wire_touch(&engine, &card);
    events::wire_resize(&engine, &window);
    events::wire_orientation(&engine, &window, &document);
    events::wire_controls(&engine, &document, &card);

    log::info!(
        "holo-card ready (orientation: {:?})",
        engine.borrow().orientation_state()
    );
    Ok(())
}
