use crate::constants::{BIOME_IDS, BIOME_SOUND_DELAY_MS};
use crate::storage::BrowserSession;
use crate::{dom, sound};
use carousel_core::page;
use carousel_core::persistence::MemoryStore;
use wasm_bindgen::prelude::*;

/// Called by a destination page's script.
///
/// Records the biome so the landing carousel reopens on it, schedules the
/// ambient sound toggle after the splash delay, and returns
/// `[prevId, nextId]` for the sticky header.
#[wasm_bindgen(js_name = enterBiomePage)]
pub fn enter_biome_page(id: &str, audio_src: Option<String>) -> Result<js_sys::Array, JsValue> {
    let neighbors = match BrowserSession::open() {
        Some(mut session) => page::enter(&mut session, &BIOME_IDS, id),
        None => {
            log::warn!("[page] sessionStorage unavailable; visit not remembered");
            page::enter(&mut MemoryStore::new(), &BIOME_IDS, id)
        }
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    if let Some(src) = audio_src {
        wasm_bindgen_futures::spawn_local(async move {
            dom::sleep_ms(BIOME_SOUND_DELAY_MS).await;
            if let Some(document) = dom::window_document() {
                sound::wire_mute_button(&document, &src);
            }
        });
    }

    let out = js_sys::Array::new();
    out.push(&JsValue::from_str(&neighbors.prev));
    out.push(&JsValue::from_str(&neighbors.next));
    Ok(out)
}
