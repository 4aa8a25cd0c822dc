use crate::platform::{BrowserPlatform, Callbacks};
use crate::sink::CssVarSink;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tilt_core::{TiltConfig, TiltEngine, TimerKind};
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type CardEngine = TiltEngine<BrowserPlatform, CssVarSink>;
pub type SharedEngine = Rc<RefCell<CardEngine>>;

fn deferred(engine: &Weak<RefCell<CardEngine>>, run: fn(&mut CardEngine)) -> Closure<dyn FnMut()> {
    let engine = engine.clone();
    Closure::wrap(Box::new(move || {
        if let Some(e) = engine.upgrade() {
            run(&mut e.borrow_mut());
        }
    }) as Box<dyn FnMut()>)
}

/// Build the engine for `card` and bind its frame/timer callbacks.
///
/// Callbacks hold a weak handle; the event listeners wired afterwards keep
/// the engine alive for the lifetime of the page.
pub fn mount(window: &web::Window, card: &web::HtmlElement) -> SharedEngine {
    let platform = BrowserPlatform::new(window.clone(), card.clone().into());
    let sink = CssVarSink::new(card);
    let engine = Rc::new(RefCell::new(TiltEngine::new(
        platform,
        sink,
        TiltConfig::default(),
    )));

    let weak = Rc::downgrade(&engine);
    let callbacks = Callbacks {
        frame: deferred(&weak, |e| e.run_frame()),
        release_grace: deferred(&weak, |e| e.timer_fired(TimerKind::ReleaseGrace)),
        orientation_resume: deferred(&weak, |e| e.timer_fired(TimerKind::OrientationResume)),
    };
    {
        let mut e = engine.borrow_mut();
        e.platform_mut().bind(callbacks);
        e.reset();
    }
    engine
}
