//! perk-ui - Presentational components for perk landing pages
//!
//! Contains display types, browser-facing hooks (viewport width, viewport
//! entry) and pure view components used by the web app and its mocks.

pub mod animation;
pub mod components;
pub mod display_types;
pub mod responsive;
pub mod wasm_utils;

pub use animation::{use_reveal_once, EntranceAnimation, Keyframe, RevealHandle, ENTRANCE};
pub use components::*;
pub use display_types::*;
pub use responsive::{is_narrow_width, use_is_mobile, CardScale, MOBILE_BREAKPOINT_PX};
