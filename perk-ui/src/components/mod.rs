//! Shared UI components

pub mod benefit_card;
pub mod benefits_section;
pub mod icons;

pub use benefit_card::{BenefitCard, BenefitCardProps};
pub use benefits_section::BenefitsSection;
pub use icons::{DrawableIcon, Icon, LucideIcon, UnknownIcon};
