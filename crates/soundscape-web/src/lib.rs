//! Web front-end for the soundscape engine: `#[wasm_bindgen]` surface for
//! page JS, plus the WebAudio/DOM capability implementations.
#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use soundscape_core::{SoundScaper, SoundscapeError, TargetBinding};

mod audio;
mod dom;
mod events;

pub use audio::WebRenderer;
pub use dom::DomSurface;

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundscape-web loaded");
    Ok(())
}

/// Page-facing handle around the engine. Target identities are element ids.
#[wasm_bindgen]
pub struct Soundscape {
    engine: events::SharedEngine,
}

#[wasm_bindgen]
impl Soundscape {
    /// `row_threshold` is the half-height of the row band (default 110).
    #[wasm_bindgen(constructor)]
    pub fn new(row_threshold: Option<f64>) -> Soundscape {
        let engine = match row_threshold {
            Some(threshold) => SoundScaper::with_row_threshold(
                DomSurface::new(),
                WebRenderer::new(),
                threshold as f32,
            ),
            None => SoundScaper::new(DomSurface::new(), WebRenderer::new()),
        };
        Soundscape {
            engine: Rc::new(RefCell::new(engine)),
        }
    }

    /// URL prefix for sound assets; `<base>/<sound>` is fetched.
    pub fn set_server_url(&self, base_url: String) -> Result<(), JsValue> {
        self.engine
            .borrow_mut()
            .configure(base_url, None)
            .map_err(to_js)
    }

    /// Accepts an array of `{element, sound}` objects plus an optional
    /// pointer sound name; returns the accepted element ids.
    pub fn set_targets(
        &self,
        entries: &JsValue,
        pointer_sound: Option<String>,
    ) -> Result<Array, JsValue> {
        let bindings = parse_bindings(entries)?;
        let mut engine = self.engine.borrow_mut();
        let accepted = engine.set_targets(bindings, pointer_sound).map_err(to_js)?;
        Ok(accepted
            .iter()
            .map(|binding| JsValue::from_str(&binding.target))
            .collect())
    }

    /// Wire the Ctrl+S start-up combination.
    pub fn listen_for_startup(&self) {
        events::wire_startup_keydown(self.engine.clone());
    }

    /// Start immediately; the key combination does the same.
    pub fn start(&self) {
        events::start_engine(&self.engine);
    }

    pub fn add_sound(&self, element_id: String, sound: String) -> Result<(), JsValue> {
        self.engine
            .borrow_mut()
            .add_sound(element_id.clone(), &sound)
            .map_err(to_js)?;
        events::wire_hover(self.engine.clone(), &element_id);
        Ok(())
    }

    pub fn remove_sound(&self, element_id: String) {
        self.engine.borrow_mut().remove_sound(&element_id);
    }

    pub fn modify_sound(&self, element_id: String, sound: String) -> Result<(), JsValue> {
        self.engine
            .borrow_mut()
            .modify_sound(&element_id, &sound)
            .map_err(to_js)
    }
}

fn parse_bindings(entries: &JsValue) -> Result<Vec<TargetBinding<String>>, JsValue> {
    let array = entries
        .dyn_ref::<Array>()
        .ok_or_else(|| JsValue::from_str("expected an array of {element, sound} entries"))?;
    let mut bindings = Vec::with_capacity(array.length() as usize);
    for entry in array.iter() {
        let element = Reflect::get(&entry, &JsValue::from_str("element"))?
            .as_string()
            .ok_or_else(|| JsValue::from_str("entry.element must be a string id"))?;
        let sound = Reflect::get(&entry, &JsValue::from_str("sound"))?
            .as_string()
            .ok_or_else(|| JsValue::from_str("entry.sound must be a string"))?;
        bindings.push(TargetBinding {
            target: element,
            sound,
        });
    }
    Ok(bindings)
}

fn to_js(e: SoundscapeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
