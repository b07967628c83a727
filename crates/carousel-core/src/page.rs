use crate::error::CarouselError;
use crate::model::wrap_index;
use crate::persistence::{remember, SessionStore};

/// Neighbouring biomes shown in a destination page's sticky header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageNeighbors {
    pub prev: String,
    pub next: String,
}

pub fn neighbors(ids: &[&str], id: &str) -> Result<PageNeighbors, CarouselError> {
    let pos = ids
        .iter()
        .position(|candidate| *candidate == id)
        .ok_or_else(|| CarouselError::UnknownItem(id.to_string()))?;
    let pos = pos as isize;
    Ok(PageNeighbors {
        prev: ids[wrap_index(pos - 1, ids.len())].to_string(),
        next: ids[wrap_index(pos + 1, ids.len())].to_string(),
    })
}

/// Record a visit to `id` so the landing carousel reopens on it.
pub fn enter<S: SessionStore + ?Sized>(
    store: &mut S,
    ids: &[&str],
    id: &str,
) -> Result<PageNeighbors, CarouselError> {
    let n = neighbors(ids, id)?;
    remember(store, id)?;
    log::info!("[page] entered {} (prev={}, next={})", id, n.prev, n.next);
    Ok(n)
}
