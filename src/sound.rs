use crate::constants::{AUDIO_VOLUME, MUTE_BUTTON_ID};
use crate::dom;
use carousel_core::sound::{SoundToggle, SoundUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_audio(src: &str) -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(src) {
        Ok(audio) => {
            audio.set_loop(true);
            audio.set_volume(AUDIO_VOLUME);
            Some(audio)
        }
        Err(e) => {
            log::error!("[sound] failed to create audio for {}: {:?}", src, e);
            None
        }
    }
}

fn apply(update: SoundUpdate, audio: &web::HtmlAudioElement) {
    audio.set_muted(update.muted);
    if update.play {
        match audio.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[sound] playback refused: {:?}", e);
                    }
                });
            }
            Err(e) => log::warn!("[sound] play() failed: {:?}", e),
        }
    }
}

/// Wire the mute button to a lazily created, looping ambient track.
pub fn wire_mute_button(document: &web::Document, src: &str) {
    let Some(button) = document.get_element_by_id(MUTE_BUTTON_ID) else {
        return;
    };
    let src = src.to_string();
    let toggle = Rc::new(RefCell::new(SoundToggle::default()));
    let audio: Rc<RefCell<Option<web::HtmlAudioElement>>> = Rc::new(RefCell::new(None));
    let label = button.clone();

    dom::add_click_listener(&button, move || {
        let update = toggle.borrow_mut().toggle();
        if update.create {
            *audio.borrow_mut() = create_audio(&src);
        }
        if let Some(a) = audio.borrow().as_ref() {
            apply(update, a);
        }
        label.set_text_content(Some(update.icon()));
        log::info!("[sound] muted={}", update.muted);
    });
}
