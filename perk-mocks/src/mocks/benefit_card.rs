//! BenefitCard mock component

use super::url_state::{StateBuilder, StateReader};
use super::viewport::{Breakpoint, MockViewport, ViewportBar};
use crate::Route;
use dioxus::prelude::*;
use perk_ui::{use_is_mobile, BenefitCard, LucideIcon};
use tracing::debug;

const DEFAULT_TITLE: &str = "Save Time";
const DEFAULT_DESCRIPTION: &str = "Automate repetitive tasks";
const DEFAULT_ICON: LucideIcon = LucideIcon::Clock;

/// Control values for the mock, mirrored into the URL
#[derive(Clone, Debug, PartialEq)]
struct Controls {
    follow_window: bool,
    narrow: bool,
    width: u32,
    icon: LucideIcon,
    title: String,
    description: String,
}

impl Controls {
    fn from_state(state: Option<&str>) -> Self {
        let reader = StateReader::new(state);
        Self {
            follow_window: reader.get_bool("follow", true),
            narrow: reader.get_bool("narrow", false),
            width: reader.get_parsed("width", 0),
            icon: reader.get_parsed("icon", DEFAULT_ICON),
            title: reader.get_string("title", DEFAULT_TITLE),
            description: reader.get_string("desc", DEFAULT_DESCRIPTION),
        }
    }

    fn to_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();
        builder.set_bool("follow", self.follow_window, true);
        builder.set_bool("narrow", self.narrow, false);
        builder.set_string("width", &self.width.to_string(), "0");
        builder.set_string("icon", self.icon.as_str(), DEFAULT_ICON.as_str());
        builder.set_string("title", &self.title, DEFAULT_TITLE);
        builder.set_string("desc", &self.description, DEFAULT_DESCRIPTION);
        builder.build_option()
    }

    fn select_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.width = breakpoint.width;
        match breakpoint.is_mobile() {
            Some(is_mobile) => {
                self.follow_window = false;
                self.narrow = is_mobile;
            }
            None => self.follow_window = true,
        }
    }
}

#[component]
pub fn BenefitCardMock(initial_state: Option<String>) -> Element {
    let controls = use_signal(|| Controls::from_state(initial_state.as_deref()));
    let mut replay = use_signal(|| 0u32);
    let window_is_mobile = use_is_mobile();

    let current = controls();
    let is_mobile = if current.follow_window {
        window_is_mobile()
    } else {
        current.narrow
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            // Controls panel
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto space-y-3",
                    div { class: "flex items-center justify-between",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "BenefitCard" }
                        button {
                            class: "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600",
                            onclick: move |_| {
                                debug!("Replaying entrance animation");
                                *replay.write() += 1;
                            },
                            "Replay"
                        }
                    }

                    ViewportBar {
                        width: current.width,
                        on_select: move |breakpoint: Breakpoint| {
                            apply(controls, move |c| c.select_breakpoint(breakpoint))
                        },
                    }

                    div { class: "flex flex-wrap items-center gap-4 text-sm",
                        label { class: "flex items-center gap-2",
                            input {
                                r#type: "checkbox",
                                checked: current.follow_window,
                                onchange: move |evt| {
                                    let checked = evt.checked();
                                    apply(controls, move |c| c.follow_window = checked)
                                },
                            }
                            "Follow window"
                        }
                        label { class: "flex items-center gap-2",
                            input {
                                r#type: "checkbox",
                                checked: is_mobile,
                                disabled: current.follow_window,
                                onchange: move |evt| {
                                    let checked = evt.checked();
                                    apply(controls, move |c| c.narrow = checked)
                                },
                            }
                            "Mobile layout"
                        }
                        select {
                            class: "bg-gray-700 rounded px-2 py-1",
                            value: current.icon.as_str(),
                            onchange: move |evt| {
                                if let Ok(icon) = evt.value().parse::<LucideIcon>() {
                                    apply(controls, move |c| c.icon = icon)
                                }
                            },
                            for icon in LucideIcon::ALL {
                                option {
                                    value: icon.as_str(),
                                    selected: icon == current.icon,
                                    "{icon}"
                                }
                            }
                        }
                    }

                    div { class: "grid grid-cols-2 gap-3",
                        input {
                            class: "bg-gray-700 rounded px-2 py-1 text-sm",
                            placeholder: "Title",
                            value: "{current.title}",
                            oninput: move |evt| {
                                let value = evt.value();
                                apply(controls, move |c| c.title = value)
                            },
                        }
                        input {
                            class: "bg-gray-700 rounded px-2 py-1 text-sm",
                            placeholder: "Description",
                            value: "{current.description}",
                            oninput: move |evt| {
                                let value = evt.value();
                                apply(controls, move |c| c.description = value)
                            },
                        }
                    }
                }
            }

            // Content area
            div { class: "max-w-6xl mx-auto p-6",
                MockViewport { width: current.width,
                    // A new key remounts the card, which re-arms its entrance animation
                    for run in std::iter::once(replay()) {
                        BenefitCard {
                            key: "{run}",
                            icon: current.icon,
                            title: current.title.clone(),
                            description: current.description.clone(),
                            is_mobile,
                        }
                    }
                }
            }
        }
    }
}

/// Apply a control change and mirror the result into the URL
fn apply(mut controls: Signal<Controls>, change: impl FnOnce(&mut Controls)) {
    change(&mut *controls.write());
    let state = controls.read().to_state();
    navigator().replace(Route::MockBenefitCard { state });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_controls_have_no_state() {
        let controls = Controls::from_state(None);
        assert!(controls.follow_window);
        assert_eq!(controls.icon, DEFAULT_ICON);
        assert_eq!(controls.title, DEFAULT_TITLE);
        assert_eq!(controls.to_state(), None);
    }

    #[test]
    fn test_controls_survive_url() {
        let mut controls = Controls::from_state(None);
        controls.select_breakpoint(Breakpoint::new("Mobile", 375));
        controls.icon = LucideIcon::Shield;
        controls.description = "Encrypted by default".to_string();

        let state = controls.to_state();
        assert!(state.is_some());
        assert_eq!(Controls::from_state(state.as_deref()), controls);
    }

    #[test]
    fn test_breakpoint_selection() {
        let mut controls = Controls::from_state(None);

        controls.select_breakpoint(Breakpoint::new("Mobile", 375));
        assert!(!controls.follow_window);
        assert!(controls.narrow);

        controls.select_breakpoint(Breakpoint::new("Desktop", 1280));
        assert!(!controls.follow_window);
        assert!(!controls.narrow);

        controls.select_breakpoint(Breakpoint::new("Full", 0));
        assert!(controls.follow_window);
        assert_eq!(controls.width, 0);
    }
}
