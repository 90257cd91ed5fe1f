//! Event wiring: the start-up key combination, the pointer stream, and the
//! per-target hover handlers. Listeners are leaked with `Closure::forget`;
//! they live for the rest of the session by design.

use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::WebRenderer;
use crate::dom::{self, DomSurface};
use soundscape_core::SoundScaper;

pub type Engine = SoundScaper<DomSurface, WebRenderer>;
pub type SharedEngine = Rc<RefCell<Engine>>;

/// Ctrl+S starts the soundscape.
pub fn wire_startup_keydown(engine: SharedEngine) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() && ev.key() == "s" {
            ev.prevent_default();
            start_engine(&engine);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(document) = dom::window_document() {
        _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Start the engine and, on first success, wire the pointer stream plus
/// hover handlers for every configured target. A second trigger fails inside
/// `start()` and wires nothing, so there is never more than one pointer
/// subscription or renderer context.
pub fn start_engine(engine: &SharedEngine) {
    let targets: Vec<String> = {
        let mut eng = engine.borrow_mut();
        if let Err(e) = eng.start() {
            log::error!("[soundscape] start failed: {e}");
            return;
        }
        eng.registry()
            .iter()
            .filter_map(|source| source.target().cloned())
            .collect()
    };
    wire_pointer_move(engine.clone());
    for id in &targets {
        wire_hover(engine.clone(), id);
    }
}

pub fn wire_pointer_move(engine: SharedEngine) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        engine
            .borrow_mut()
            .on_pointer_move(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Hover acceleration: double playback rate while the pointer is over the
/// target element.
pub fn wire_hover(engine: SharedEngine, element_id: &str) {
    let surface = DomSurface::new();
    let Some(element) = surface.element(element_id) else {
        log::warn!("[soundscape] no element #{element_id} for hover wiring");
        return;
    };
    {
        let engine = engine.clone();
        let id = element_id.to_string();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                engine.borrow_mut().on_pointer_enter(&id);
            }) as Box<dyn FnMut(_)>);
        _ = element
            .add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let id = element_id.to_string();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                engine.borrow_mut().on_pointer_leave(&id);
            }) as Box<dyn FnMut(_)>);
        _ = element.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
