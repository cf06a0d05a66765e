//! DOM hooks and page timings for the web front-end.
//!
//! Interaction tuning lives in `desk_core::constants`; this file only names
//! what the host page has to provide.

// Element ids the page must carry
pub const CANVAS_ID: &str = "three-canvas";
pub const POPUP_ID: &str = "story-popup";
pub const POPUP_TITLE_ID: &str = "popup-title";
pub const POPUP_TEXT_ID: &str = "popup-text";
pub const POPUP_CLOSE_ID: &str = "close-popup";
pub const LOADING_SCREEN_ID: &str = "loading-screen";

// Popup visibility classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";

// Loading screen: wait, fade the opacity, then drop it from layout
pub const LOADING_FADE_DELAY_MS: i32 = 1500;
pub const LOADING_REMOVE_DELAY_MS: i32 = 500;
