use carousel_core::persistence::SessionStore;
use carousel_core::CarouselError;
use web_sys as web;

/// `window.sessionStorage` behind the core's store trait.
pub struct BrowserSession(web::Storage);

impl BrowserSession {
    pub fn open() -> Option<Self> {
        let storage = web::window()?.session_storage().ok().flatten()?;
        Some(Self(storage))
    }
}

impl SessionStore for BrowserSession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CarouselError> {
        self.0
            .set_item(key, value)
            .map_err(|e| CarouselError::Storage(format!("{:?}", e)))
    }
}
