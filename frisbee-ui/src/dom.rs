//! DOM helpers
//!
//! Thin wrappers around `web-sys` lookups. Everything returns `Option` so a
//! missing element turns the caller into a no-op.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

/// All elements matching `selector` under `root` (the document if `None`)
pub fn query_all(root: Option<&Element>, selector: &str) -> Vec<Element> {
    let list = match root {
        Some(el) => el.query_selector_all(selector),
        None => match document() {
            Some(doc) => doc.query_selector_all(selector),
            None => return Vec::new(),
        },
    };

    let Ok(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let callback = closure.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log_error(&format!("Failed to attach {} listener: {:?}", event, e));
    }
    closure.forget();
}

/// Milliseconds since the epoch
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
