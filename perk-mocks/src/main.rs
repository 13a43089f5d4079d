use dioxus::logger::tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    info!("Starting perk mocks");
    dioxus::launch(perk_mocks::App);
}
