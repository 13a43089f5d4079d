//! Benefits section - a heading over a responsive grid of benefit cards

use crate::components::benefit_card::BenefitCard;
use crate::display_types::Benefit;
use crate::responsive::use_is_mobile;
use dioxus::prelude::*;

/// Grid of benefit cards
///
/// Owns the narrow-viewport query and passes the result down to every card,
/// so the cards themselves stay pure.
#[component]
pub fn BenefitsSection(
    #[props(default)] heading: Option<String>,
    benefits: Vec<Benefit>,
) -> Element {
    let is_mobile = use_is_mobile();
    let narrow = is_mobile();

    let grid_class = if narrow {
        "grid grid-cols-1 gap-4"
    } else {
        "grid grid-cols-3 gap-8"
    };

    rsx! {
        section { class: "py-16 px-4", "data-testid": "benefits-section",
            if let Some(heading) = heading {
                h2 { class: "text-3xl font-bold text-white text-center mb-12", "{heading}" }
            }
            div { class: "{grid_class} max-w-6xl mx-auto",
                for benefit in benefits {
                    BenefitCard {
                        key: "{benefit.id}",
                        icon: benefit.icon,
                        title: benefit.title,
                        description: benefit.description,
                        is_mobile: narrow,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::LucideIcon;

    fn benefit(id: &str, icon: LucideIcon, title: &str) -> Benefit {
        Benefit {
            id: id.to_string(),
            icon,
            title: title.to_string(),
            description: format!("{title} description"),
        }
    }

    fn three_benefits() -> Element {
        rsx! {
            BenefitsSection {
                heading: "Why perk".to_string(),
                benefits: vec![
                    benefit("time", LucideIcon::Clock, "Save Time"),
                    benefit("speed", LucideIcon::Zap, "Move Faster"),
                    benefit("safety", LucideIcon::Shield, "Stay Safe"),
                ],
            }
        }
    }

    fn empty_section() -> Element {
        rsx! {
            BenefitsSection { benefits: Vec::new() }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_one_card_per_benefit() {
        let html = render(three_benefits);
        assert_eq!(html.matches("data-testid=\"benefit-card\"").count(), 3);
        assert!(html.contains(">Why perk</h2>"));
        assert!(html.contains(">Save Time</h3>"));
        assert!(html.contains(">Move Faster</h3>"));
        assert!(html.contains(">Stay Safe description</p>"));
    }

    #[test]
    fn test_defaults_to_wide_layout() {
        let html = render(three_benefits);
        assert!(html.contains("grid-cols-3"));
        assert_eq!(html.matches("data-scale=\"regular\"").count(), 3);
    }

    #[test]
    fn test_empty_section_has_no_cards() {
        let html = render(empty_section);
        assert!(html.contains("data-testid=\"benefits-section\""));
        assert!(!html.contains("benefit-card"));
        assert!(!html.contains("<h2"));
    }
}
