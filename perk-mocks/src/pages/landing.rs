//! Landing page - hero plus the benefits grid from fixture data

use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use perk_ui::BenefitsSection;

#[component]
pub fn Landing() -> Element {
    let benefits = demo_data::get_benefits();

    rsx! {
        div { class: "bg-gray-900 text-white",
            header { class: "min-h-[70vh] flex flex-col items-center justify-center text-center px-6",
                h1 { class: "text-5xl font-bold mb-4", "Do more with less" }
                p { class: "text-lg text-gray-400 max-w-xl mb-8",
                    "Everything you need to get repetitive work off your plate. Scroll down to see why."
                }
                Link {
                    to: Route::MockIndex {},
                    class: "px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm",
                    "Component mocks"
                }
            }
            BenefitsSection {
                heading: "Why teams switch".to_string(),
                benefits,
            }
        }
    }
}
