use crate::constants::{CLASS_FADE_OUT, INTRO_FADE_OUT_MS, INTRO_ID, INTRO_TOTAL_MS};
use crate::dom;
use crate::storage::BrowserSession;
use carousel_core::persistence::first_visit;
use web_sys as web;

/// Play the intro once per session; returning visitors skip it.
pub fn set_up(document: &web::Document) {
    let Some(intro) = document.get_element_by_id(INTRO_ID) else {
        return;
    };
    let first = match BrowserSession::open() {
        Some(mut session) => first_visit(&mut session).unwrap_or_else(|e| {
            log::warn!("[intro] {}", e);
            true
        }),
        None => true,
    };
    if !first {
        log::info!("[intro] skipped for returning visitor");
        dom::set_display_none(&intro);
        return;
    }
    dom::set_timeout(INTRO_TOTAL_MS, move || {
        _ = intro.class_list().add_1(CLASS_FADE_OUT);
        dom::set_timeout(INTRO_FADE_OUT_MS, move || dom::set_display_none(&intro));
    });
}
