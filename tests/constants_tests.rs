// Host-side tests for page and carousel constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use carousel_core::constants::*;
use constants::*;
use std::collections::HashSet;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(INTRO_TOTAL_MS > 0);
    assert!(INTRO_FADE_OUT_MS > 0);
    assert!(BIOME_SOUND_DELAY_MS > 0);
    assert_eq!(UI_LOCKED_DURATION, Duration::from_millis(500));
    assert!(SWIPE_THRESHOLD_PX > 0.0);
}

#[test]
fn class_vocabulary_is_stable() {
    assert_eq!(CLASS_ACTIVE, "active");
    assert_eq!(CLASS_PREV, "prev");
    assert_eq!(CLASS_NEXT, "next");
    assert_eq!(CLASS_ANIMATE_ENTER, "animate-enter");
    assert_eq!(CLASS_NO_TRANSITION, "no-transition");
    assert_eq!(ACTIVE_BIOME_KEY, "activeBiome");
}

#[test]
fn ready_state_matches_the_dom_string() {
    // document.readyState is a plain string: "loading", "interactive" or "complete".
    assert_eq!(READY_STATE_LOADING, "loading");
}

#[test]
fn deployed_biomes_are_unique_and_enough() {
    let unique: HashSet<&str> = BIOME_IDS.iter().copied().collect();
    assert_eq!(unique.len(), BIOME_IDS.len());
    assert!(BIOME_IDS.len() >= MIN_ITEMS);
}
