//! Viewport switcher for responsive testing

use dioxus::prelude::*;
use perk_ui::is_narrow_width;

/// Breakpoint definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: u32, // 0 = full width
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }

    /// Whether a card shown at this width should use the mobile layout.
    /// Full width follows the real window, so it reports `None`.
    pub fn is_mobile(&self) -> Option<bool> {
        if self.width == 0 {
            None
        } else {
            Some(is_narrow_width(f64::from(self.width)))
        }
    }
}

/// Default breakpoints
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Desktop", 1280),
    Breakpoint::new("Full", 0),
];

/// Row of breakpoint buttons
#[component]
pub fn ViewportBar(width: u32, on_select: EventHandler<Breakpoint>) -> Element {
    rsx! {
        div { class: "flex gap-2",
            span { class: "text-xs text-gray-500 self-center mr-2", "Viewport:" }
            for breakpoint in DEFAULT_BREAKPOINTS.iter().copied() {
                button {
                    class: if breakpoint.width == width { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: move |_| on_select.call(breakpoint),
                    "{breakpoint.name}"
                }
            }
        }
    }
}

/// Viewport container - just applies width constraint
#[component]
pub fn MockViewport(width: u32, children: Element) -> Element {
    // When width is 0 (Full), use w-full to expand; otherwise use fixed width
    let class = if width > 0 {
        "bg-gray-950 rounded-lg overflow-hidden p-6"
    } else {
        "bg-gray-950 rounded-lg overflow-hidden p-6 w-full"
    };
    let style = if width > 0 {
        format!("width: {}px; margin: 0 auto;", width)
    } else {
        String::new()
    };

    rsx! {
        div { class, style, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_map_to_layout() {
        let by_name = |name: &str| {
            DEFAULT_BREAKPOINTS
                .iter()
                .find(|b| b.name == name)
                .copied()
                .unwrap()
        };
        assert_eq!(by_name("Mobile").is_mobile(), Some(true));
        assert_eq!(by_name("Tablet").is_mobile(), Some(false));
        assert_eq!(by_name("Desktop").is_mobile(), Some(false));
        assert_eq!(by_name("Full").is_mobile(), None);
    }
}
