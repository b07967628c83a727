use crate::carousel::{self, SharedController};
use carousel_core::input::key_direction;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, shared: &SharedController) {
    let key = ev.key();
    if let Some(dir) = key_direction(&key) {
        log::debug!("[keys] {} -> {:?}", key, dir);
        carousel::step(shared, dir);
    }
}

/// Arrow keys are read on `<body>`, falling back to the window.
pub fn wire_keydown(document: &web::Document, shared: &SharedController) {
    let shared = shared.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &shared);
    }) as Box<dyn FnMut(_)>);
    let target: Option<web::EventTarget> = match document.body() {
        Some(body) => Some(body.into()),
        None => web::window().map(Into::into),
    };
    if let Some(target) = target {
        _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
