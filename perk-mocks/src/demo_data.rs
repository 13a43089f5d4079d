//! Demo data for the landing page and mocks
//!
//! Provides static fixture data so pages render without a backend.

use perk_ui::Benefit;
use std::sync::OnceLock;
use tracing::error;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/benefits.json");

static BENEFITS: OnceLock<Vec<Benefit>> = OnceLock::new();

fn parse_benefits(json: &str) -> Vec<Benefit> {
    match serde_json::from_str(json) {
        Ok(benefits) => benefits,
        Err(e) => {
            error!("Failed to parse benefits fixture: {e}");
            Vec::new()
        }
    }
}

/// All fixture benefits, in display order
pub fn get_benefits() -> Vec<Benefit> {
    BENEFITS
        .get_or_init(|| parse_benefits(FIXTURE_JSON))
        .clone()
}

/// The first `count` fixture benefits
pub fn get_featured_benefits(count: usize) -> Vec<Benefit> {
    get_benefits().into_iter().take(count).collect()
}
