//! Narrow-viewport detection and the two card size scales it selects between

use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::debug;

use crate::wasm_utils::WindowEventListener;

/// Viewports narrower than this many CSS pixels use the mobile layout.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Whether a viewport of `width` CSS pixels counts as mobile.
pub fn is_narrow_width(width: f64) -> bool {
    width < f64::from(MOBILE_BREAKPOINT_PX)
}

/// Size scale for a card: padding, icon badge, icon glyph and heading text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardScale {
    Regular,
    Compact,
}

impl CardScale {
    pub fn for_viewport(is_mobile: bool) -> Self {
        if is_mobile {
            Self::Compact
        } else {
            Self::Regular
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Compact => "compact",
        }
    }

    pub fn padding_class(&self) -> &'static str {
        match self {
            Self::Regular => "p-8",
            Self::Compact => "p-6",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Regular => "w-16 h-16",
            Self::Compact => "w-12 h-12",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Regular => "w-8 h-8",
            Self::Compact => "w-6 h-6",
        }
    }

    pub fn heading_class(&self) -> &'static str {
        match self {
            Self::Regular => "text-xl",
            Self::Compact => "text-lg",
        }
    }
}

/// Hook tracking whether the window is narrower than [`MOBILE_BREAKPOINT_PX`].
///
/// Starts as `false` and is synced with `window.innerWidth` after mount, then
/// on every `resize`. The signal is only written when the value flips, so
/// resizing within one side of the breakpoint does not re-render readers.
/// Outside a browser the signal stays `false`.
pub fn use_is_mobile() -> Signal<bool> {
    let is_mobile = use_signal(|| false);
    let mut resize_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // WORKAROUND: web_sys_x::window() has to run after the render cycle, so the
    // listener is installed from use_effect rather than use_hook.
    use_effect(move || {
        if resize_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        sync_is_mobile(&window, is_mobile);

        // The resize callback runs from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();
        let listener_window = window.clone();
        let listener = WindowEventListener::new(window, "resize", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            sync_is_mobile(&listener_window, is_mobile);
        });

        resize_listener.set(Some(listener));
    });

    use_drop(move || {
        // Take the listener out and drop it from a task so the JS call does
        // not happen during scope teardown.
        if let Some(listener) = resize_listener.write().take() {
            spawn(async move {
                drop(listener);
            });
        }
    });

    is_mobile
}

fn sync_is_mobile(window: &web_sys_x::Window, mut is_mobile: Signal<bool>) {
    let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) else {
        return;
    };
    let narrow = is_narrow_width(width);

    // Signals may already be dropped if the component unmounted first.
    let changed = match is_mobile.try_peek() {
        Ok(current) => *current != narrow,
        Err(_) => return,
    };
    if changed {
        debug!("Viewport width {width}px, mobile layout: {narrow}");
        if let Ok(mut guard) = is_mobile.try_write() {
            *guard = narrow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert!(is_narrow_width(375.0));
        assert!(is_narrow_width(767.9));
        assert!(!is_narrow_width(768.0));
        assert!(!is_narrow_width(1280.0));
    }

    #[test]
    fn test_scale_for_viewport() {
        assert_eq!(CardScale::for_viewport(true), CardScale::Compact);
        assert_eq!(CardScale::for_viewport(false), CardScale::Regular);
    }

    #[test]
    fn test_compact_scale_is_smaller_everywhere() {
        let regular = CardScale::Regular;
        let compact = CardScale::Compact;
        assert_eq!(regular.padding_class(), "p-8");
        assert_eq!(compact.padding_class(), "p-6");
        assert_eq!(regular.icon_class(), "w-8 h-8");
        assert_eq!(compact.icon_class(), "w-6 h-6");
        assert_eq!(regular.heading_class(), "text-xl");
        assert_eq!(compact.heading_class(), "text-lg");
        assert_ne!(regular.badge_class(), compact.badge_class());
    }
}
