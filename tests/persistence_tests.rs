// Host-side tests for session persistence, destination pages and the sound toggle.

use carousel_core::constants::{ACTIVE_BIOME_KEY, ICON_MUTED, ICON_UNMUTED, VISITED_KEY};
use carousel_core::page::{self, PageNeighbors};
use carousel_core::persistence::{
    first_visit, load, remember, resolve_initial_index, MemoryStore, SessionStore,
};
use carousel_core::sound::SoundToggle;
use carousel_core::{Carousel, CarouselError, CarouselParams, Item, RecordingView};

const DEPLOYED: [&str; 5] = ["forest", "mesa", "caldera", "marine", "tundra"];

fn items(ids: &[&str]) -> Vec<Item> {
    ids.iter().map(|id| Item::new(*id, *id)).collect()
}

#[test]
fn persisted_id_seeds_the_active_index() {
    // Marine sits third in this markup order.
    let order = ["forest", "mesa", "marine", "caldera", "tundra"];
    let mut store = MemoryStore::new();
    remember(&mut store, "marine").unwrap();
    let stored = load(&store);
    let mut view = RecordingView::from_items(&items(&order));
    let c = Carousel::restore_from(
        items(&order),
        stored.as_deref(),
        CarouselParams::default(),
        &mut view,
    )
    .unwrap();
    assert_eq!(c.active_index(), 2);
    assert_eq!(c.model().active_item().id, "marine");

    let mut view = RecordingView::from_items(&items(&DEPLOYED));
    let c = Carousel::restore_from(
        items(&DEPLOYED),
        stored.as_deref(),
        CarouselParams::default(),
        &mut view,
    )
    .unwrap();
    assert_eq!(c.active_index(), 3);
    assert_eq!(view.holders("active"), vec![3]);
}

#[test]
fn missing_or_unknown_ids_start_at_zero() {
    let list = items(&DEPLOYED);
    assert_eq!(resolve_initial_index(&list, None), 0);
    assert_eq!(resolve_initial_index(&list, Some("desert")), 0);
    assert_eq!(resolve_initial_index(&list, Some("tundra")), 4);
}

#[test]
fn empty_stored_value_counts_as_absent() {
    let mut store = MemoryStore::new();
    assert_eq!(load(&store), None);
    store.set_item(ACTIVE_BIOME_KEY, "").unwrap();
    assert_eq!(load(&store), None);
    remember(&mut store, "mesa").unwrap();
    assert_eq!(load(&store).as_deref(), Some("mesa"));
}

#[test]
fn first_visit_is_reported_once_per_session() {
    let mut store = MemoryStore::new();
    assert!(first_visit(&mut store).unwrap());
    assert_eq!(store.get_item(VISITED_KEY).as_deref(), Some("true"));
    assert!(!first_visit(&mut store).unwrap());
}

#[test]
fn page_neighbors_wrap_at_both_ends() {
    assert_eq!(
        page::neighbors(&DEPLOYED, "forest").unwrap(),
        PageNeighbors {
            prev: "tundra".into(),
            next: "mesa".into()
        }
    );
    let n = page::neighbors(&DEPLOYED, "tundra").unwrap();
    assert_eq!(n.prev, "marine");
    assert_eq!(n.next, "forest");
}

#[test]
fn entering_a_page_remembers_it() {
    let mut store = MemoryStore::new();
    let n = page::enter(&mut store, &DEPLOYED, "caldera").unwrap();
    assert_eq!(n.prev, "mesa");
    assert_eq!(n.next, "marine");
    assert_eq!(load(&store).as_deref(), Some("caldera"));
}

#[test]
fn entering_an_unknown_page_writes_nothing() {
    let mut store = MemoryStore::new();
    let err = page::enter(&mut store, &DEPLOYED, "desert").unwrap_err();
    assert_eq!(err, CarouselError::UnknownItem("desert".into()));
    assert_eq!(load(&store), None);
}

#[test]
fn first_sound_click_creates_and_unmutes() {
    let mut s = SoundToggle::default();
    assert!(s.is_muted());

    let first = s.toggle();
    assert!(first.create);
    assert!(!first.muted);
    assert!(first.play);
    assert_eq!(first.icon(), ICON_UNMUTED);

    let second = s.toggle();
    assert!(!second.create);
    assert!(second.muted);
    assert!(!second.play);
    assert_eq!(second.icon(), ICON_MUTED);
    assert!(s.is_muted());

    let third = s.toggle();
    assert!(!third.create && third.play);
}
