//! Icons using the Lucide icon set (https://lucide.dev)
//!
//! Components take any [`DrawableIcon`] wrapped in an [`Icon`], so callers can
//! bring their own glyphs. [`LucideIcon`] is the built-in set.
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Something that can draw itself as an icon.
pub trait DrawableIcon: 'static {
    /// Stable identifier for the glyph. Icons with the same name are equal.
    fn name(&self) -> &'static str;

    /// Render the glyph with the given size/color classes.
    fn render(&self, class: &str) -> Element;
}

/// Cloneable handle to any [`DrawableIcon`], usable as a component prop.
#[derive(Clone)]
pub struct Icon(Rc<dyn DrawableIcon>);

impl Icon {
    pub fn new(icon: impl DrawableIcon) -> Self {
        Self(Rc::new(icon))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn render(&self, class: &str) -> Element {
        self.0.render(class)
    }
}

impl PartialEq for Icon {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Icon").field(&self.name()).finish()
    }
}

impl<T: DrawableIcon> From<T> for Icon {
    fn from(icon: T) -> Self {
        Self::new(icon)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown icon: {0}")]
pub struct UnknownIcon(pub String);

/// Built-in Lucide glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LucideIcon {
    Clock,
    Zap,
    Shield,
    TrendingUp,
    Users,
    Sparkles,
    Check,
    Star,
    Lock,
    Refresh,
}

impl LucideIcon {
    pub const ALL: [LucideIcon; 10] = [
        Self::Clock,
        Self::Zap,
        Self::Shield,
        Self::TrendingUp,
        Self::Users,
        Self::Sparkles,
        Self::Check,
        Self::Star,
        Self::Lock,
        Self::Refresh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Zap => "zap",
            Self::Shield => "shield",
            Self::TrendingUp => "trending-up",
            Self::Users => "users",
            Self::Sparkles => "sparkles",
            Self::Check => "check",
            Self::Star => "star",
            Self::Lock => "lock",
            Self::Refresh => "refresh",
        }
    }
}

impl FromStr for LucideIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl fmt::Display for LucideIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DrawableIcon for LucideIcon {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn render(&self, class: &str) -> Element {
        let class = class.to_string();
        match self {
            Self::Clock => rsx! {
                LucideSvg { class,
                    circle { cx: "12", cy: "12", r: "10" }
                    polyline { points: "12 6 12 12 16 14" }
                }
            },
            Self::Zap => rsx! {
                LucideSvg { class,
                    path { d: "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" }
                }
            },
            Self::Shield => rsx! {
                LucideSvg { class,
                    path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
                }
            },
            Self::TrendingUp => rsx! {
                LucideSvg { class,
                    polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
                    polyline { points: "16 7 22 7 22 13" }
                }
            },
            Self::Users => rsx! {
                LucideSvg { class,
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                }
            },
            Self::Sparkles => rsx! {
                LucideSvg { class,
                    path { d: "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z" }
                    path { d: "M20 3v4" }
                    path { d: "M22 5h-4" }
                    path { d: "M4 17v2" }
                    path { d: "M5 18H3" }
                }
            },
            Self::Check => rsx! {
                LucideSvg { class,
                    path { d: "M20 6 9 17l-5-5" }
                }
            },
            Self::Star => rsx! {
                LucideSvg { class,
                    path { d: "M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z" }
                }
            },
            Self::Lock => rsx! {
                LucideSvg { class,
                    rect {
                        x: "3",
                        y: "11",
                        width: "18",
                        height: "11",
                        rx: "2",
                        ry: "2",
                    }
                    path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
                }
            },
            Self::Refresh => rsx! {
                LucideSvg { class,
                    path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
                    path { d: "M21 3v5h-5" }
                    path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
                    path { d: "M8 16H3v5" }
                }
            },
        }
    }
}

/// Shared 24x24 stroked SVG frame
#[component]
fn LucideSvg(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot;

    impl DrawableIcon for Dot {
        fn name(&self) -> &'static str {
            "dot"
        }

        fn render(&self, class: &str) -> Element {
            let class = class.to_string();
            rsx! { span { class: "{class}", "•" } }
        }
    }

    #[test]
    fn test_icon_equality_is_by_name() {
        let a = Icon::from(LucideIcon::Clock);
        let b = Icon::from(LucideIcon::Clock);
        let c = Icon::from(LucideIcon::Zap);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_custom_icon_wraps() {
        let icon = Icon::new(Dot);
        assert_eq!(icon.name(), "dot");
        assert_ne!(icon, Icon::from(LucideIcon::Check));
    }

    #[test]
    fn test_parse_every_icon() {
        for icon in LucideIcon::ALL {
            assert_eq!(icon.as_str().parse::<LucideIcon>(), Ok(icon));
        }
    }

    #[test]
    fn test_parse_unknown_icon() {
        assert_eq!(
            "teapot".parse::<LucideIcon>(),
            Err(UnknownIcon("teapot".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for icon in LucideIcon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }
}
