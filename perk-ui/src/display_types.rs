//! Display types for UI components
//!
//! Plain data shapes handed to the view components. They carry no behavior
//! beyond serde so pages can load them from fixtures.

use crate::components::icons::LucideIcon;
use serde::{Deserialize, Serialize};

/// One entry in a benefits grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: String,
    pub icon: LucideIcon,
    pub title: String,
    pub description: String,
}
