use std::time::Duration;

// Shared carousel tuning constants used by the web frontend and host tests.

// Transition timing
pub const UI_LOCKED_DURATION: Duration = Duration::from_millis(500); // settle window after each step

// Gestures
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // min horizontal travel, max vertical drift

// Smallest ring where prev/active/next never alias
pub const MIN_ITEMS: usize = 3;

// Class vocabulary consumed by the stylesheet. Names must not change.
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PREV: &str = "prev";
pub const CLASS_NEXT: &str = "next";
pub const CLASS_ANIMATE_ENTER: &str = "animate-enter";
pub const CLASS_NO_TRANSITION: &str = "no-transition";

// Session storage keys shared with the destination pages
pub const ACTIVE_BIOME_KEY: &str = "activeBiome";
pub const VISITED_KEY: &str = "visited";

// Destination pages live under this directory, one `<id>.html` per item
pub const PAGE_DIR: &str = "pages";

// Mute button glyphs
pub const ICON_MUTED: &str = "🔇";
pub const ICON_UNMUTED: &str = "🔊";
