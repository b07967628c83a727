/// Page wiring constants for the web frontend.
///
/// DOM ids, timings and asset paths live here so the glue code stays free of
/// magic strings. Carousel tuning itself lives in `carousel_core::constants`.
// Landing page elements
pub const CAROUSEL_SELECTOR: &str = "#biomes";
pub const INTRO_ID: &str = "intro";
pub const MUTE_BUTTON_ID: &str = "mute-btn";

// `document.readyState` while the markup is still being parsed
pub const READY_STATE_LOADING: &str = "loading";

// Intro sequence (milliseconds)
pub const INTRO_TOTAL_MS: i32 = 9000; // text animation before the fade starts
pub const INTRO_FADE_OUT_MS: i32 = 4000; // fade duration before the scene is hidden
pub const CLASS_FADE_OUT: &str = "fade-out";

// Biome pages wait for their splash screen before wiring the mute button
pub const BIOME_SOUND_DELAY_MS: i32 = 4000;

// Ambient audio
pub const HOME_AUDIO_SOURCE: &str = "assets/home/home-bg-music.m4a";
pub const AUDIO_VOLUME: f64 = 1.0;

// Deployed destination order; must match the markup under #biomes
pub const BIOME_IDS: [&str; 5] = ["forest", "mesa", "caldera", "marine", "tundra"];
