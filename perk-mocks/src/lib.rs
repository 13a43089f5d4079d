//! perk mocks - Landing page demo and component mocks
//!
//! A small web app that renders perk-ui components with fixture data, plus
//! mock pages with interactive controls for working on a single component.

pub mod demo_data;
pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{Landing, MockBenefitCard, MockIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/mocks")]
    MockIndex {},
    #[route("/mock/benefit-card?:state")]
    MockBenefitCard { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
