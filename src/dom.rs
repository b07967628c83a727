use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::READY_STATE_LOADING;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot `setTimeout`. The callback is dropped by the JS side after it runs.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(handler);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), ms)
    {
        log::error!("setTimeout failed: {:?}", e);
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        set_timeout(ms, move || {
            _ = resolve.call0(&JsValue::NULL);
        });
    });
    _ = JsFuture::from(promise).await;
}

/// Resolve once the document has been parsed (immediately if it already has).
pub async fn dom_ready(document: &web::Document) {
    if document.ready_state() != READY_STATE_LOADING {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let cb = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    });
    _ = JsFuture::from(promise).await;
}

pub fn set_display_none(el: &web::Element) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", "none");
    }
}
