#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod events;
mod intro;
mod page;
mod sound;
mod storage;
mod view;

pub use page::enter_biome_page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("biome-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::dom_ready(&document).await;

    intro::set_up(&document);

    // Destination pages wire their own sound through enterBiomePage.
    let landing = document
        .query_selector(constants::CAROUSEL_SELECTOR)
        .ok()
        .flatten()
        .is_some();
    if landing {
        sound::wire_mute_button(&document, constants::HOME_AUDIO_SOURCE);
    }
    wire_carousel(&document);
    Ok(())
}

/// Carousel setup failures stay local to the carousel.
fn wire_carousel(document: &web::Document) {
    let shared = match carousel::mount(document) {
        Ok(Some(shared)) => shared,
        Ok(None) => return,
        Err(e) => {
            log::warn!("[carousel] setup skipped: {}", e);
            return;
        }
    };
    events::wire_item_clicks(&shared);
    events::wire_wheel(&shared);
    events::wire_keydown(document, &shared);
    events::wire_touch(&shared);
}
