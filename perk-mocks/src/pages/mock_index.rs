//! Mock pages with URL state persistence

use crate::demo_data;
use crate::mocks::BenefitCardMock;
use crate::Route;
use dioxus::prelude::*;
use perk_ui::BenefitCard;

#[component]
pub fn MockIndex() -> Element {
    let sample = demo_data::get_featured_benefits(1);

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "perk mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Demo" }
            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Landing {},
                    title: "Landing Page",
                    description: "Hero and the full benefits grid from fixture data",
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Components" }
            div { class: "grid grid-cols-3 gap-4",
                SpecimenCard {
                    title: "BenefitCard",
                    to: Route::MockBenefitCard {
                        state: None,
                    },
                    for benefit in sample {
                        BenefitCard {
                            key: "{benefit.id}",
                            icon: benefit.icon,
                            title: benefit.title,
                            description: benefit.description,
                            is_mobile: true,
                        }
                    }
                }
            }
        }
    }
}

/// A card-style navigation link with title and description
#[component]
fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

/// A card showing a specimen with a link to the full mock page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

// ============================================================================
// BenefitCard page wrapper
// ============================================================================

#[component]
pub fn MockBenefitCard(state: Option<String>) -> Element {
    rsx! {
        BenefitCardMock { initial_state: state }
    }
}
