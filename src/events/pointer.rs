use crate::carousel::{self, SharedController};
use crate::dom;
use carousel_core::input::{wheel_direction, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Listeners are bound once per item; the engine decides what a click means.
pub fn wire_item_clicks(shared: &SharedController) {
    let items: Vec<web::Element> = shared.borrow().view.items().to_vec();
    for (index, el) in items.iter().enumerate() {
        let shared = shared.clone();
        dom::add_click_listener(el, move || carousel::click(&shared, index));
    }
}

pub fn wire_wheel(shared: &SharedController) {
    let container = shared.borrow().view.container().clone();
    let shared = shared.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if let Some(dir) = wheel_direction(ev.delta_x(), ev.delta_y()) {
            carousel::step(&shared, dir);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn first_touch(ev: &web::TouchEvent) -> Option<web::Touch> {
    ev.touches().get(0)
}

pub fn wire_touch(shared: &SharedController) {
    let (container, threshold) = {
        let ctl = shared.borrow();
        (
            ctl.view.container().clone(),
            ctl.carousel.params().swipe_threshold_px,
        )
    };
    let tracker = Rc::new(RefCell::new(SwipeTracker::new(threshold)));

    let t = tracker.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = first_touch(&ev) {
            t.borrow_mut()
                .begin(touch.client_x() as f64, touch.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    let t = tracker.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = first_touch(&ev) {
            t.borrow_mut()
                .moved(touch.client_x() as f64, touch.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref());
    moved.forget();

    let shared = shared.clone();
    let end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        let dir = tracker.borrow_mut().release();
        if let Some(dir) = dir {
            log::debug!("[touch] swipe {:?}", dir);
            carousel::step(&shared, dir);
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref());
    end.forget();
}
