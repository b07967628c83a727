//! Session-scoped memory of the last visited biome.
//!
//! Destination pages write their id under [`ACTIVE_BIOME_KEY`]; the landing
//! page reads it once when the carousel is built.

use crate::constants::{ACTIVE_BIOME_KEY, VISITED_KEY};
use crate::error::CarouselError;
use crate::model::Item;
use fnv::FnvHashMap;

/// Minimal string key/value store, shaped after `window.sessionStorage`.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CarouselError>;
}

/// In-memory store for hosts without `sessionStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CarouselError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Last active item id, if any. Empty strings count as absent.
pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    store.get_item(ACTIVE_BIOME_KEY).filter(|id| !id.is_empty())
}

pub fn remember<S: SessionStore + ?Sized>(store: &mut S, id: &str) -> Result<(), CarouselError> {
    store.set_item(ACTIVE_BIOME_KEY, id)
}

/// Position of `id` in `items`, or 0 when absent or unmatched.
pub fn resolve_initial_index(items: &[Item], id: Option<&str>) -> usize {
    id.and_then(|id| items.iter().position(|it| it.id == id))
        .unwrap_or(0)
}

/// True on the first call of a session; marks the session as visited.
pub fn first_visit<S: SessionStore + ?Sized>(store: &mut S) -> Result<bool, CarouselError> {
    if store.get_item(VISITED_KEY).is_some_and(|v| !v.is_empty()) {
        return Ok(false);
    }
    store.set_item(VISITED_KEY, "true")?;
    Ok(true)
}
