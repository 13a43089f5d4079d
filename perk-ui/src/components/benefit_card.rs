//! Benefit card - icon badge, title and description with an entrance animation

use crate::animation::use_reveal_once;
use crate::components::icons::Icon;
use crate::responsive::CardScale;
use dioxus::prelude::*;

impl BenefitCardProps {
    /// Dioxus skips re-running a component whose props compare equal to the
    /// previous render's; this is that rule.
    pub fn needs_render(&self, previous: &Self) -> bool {
        self != previous
    }

    pub fn scale(&self) -> CardScale {
        CardScale::for_viewport(self.is_mobile)
    }
}

/// Card showing one benefit
///
/// Pure view: everything it shows comes from props, and the layout flag is
/// injected rather than read from context. The only local state is whether the
/// card has entered the viewport yet, which drives a one-shot fade/slide-in.
#[component]
pub fn BenefitCard(
    #[props(into)] icon: Icon,
    #[props(into)] title: String,
    #[props(into)] description: String,
    /// Narrow-viewport flag, usually from `use_is_mobile()` in the parent
    is_mobile: bool,
) -> Element {
    let reveal = use_reveal_once();
    let scale = CardScale::for_viewport(is_mobile);
    let style = reveal.style();

    let padding = scale.padding_class();
    let badge = scale.badge_class();
    let heading = scale.heading_class();

    rsx! {
        div {
            class: "bg-gray-800 border border-gray-700 rounded-xl shadow-lg hover:shadow-xl transition-shadow {padding}",
            style: "{style}",
            "data-testid": "benefit-card",
            "data-scale": scale.as_str(),
            onmounted: reveal.onmounted(),
            div {
                class: "rounded-lg bg-blue-500/10 text-blue-400 flex items-center justify-center mb-4 {badge}",
                "data-testid": "benefit-card-icon",
                {icon.render(scale.icon_class())}
            }
            h3 { class: "font-semibold text-white mb-2 {heading}", "{title}" }
            p { class: "text-gray-400 leading-relaxed", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::LucideIcon;

    fn props(is_mobile: bool) -> BenefitCardProps {
        BenefitCardProps {
            icon: LucideIcon::Clock.into(),
            title: "Save Time".to_string(),
            description: "Automate repetitive tasks".to_string(),
            is_mobile,
        }
    }

    fn render(props: BenefitCardProps) -> String {
        let mut dom = VirtualDom::new_with_props(BenefitCard, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_title_and_description_verbatim() {
        let html = render(props(false));
        assert!(html.contains(">Save Time</h3>"));
        assert!(html.contains(">Automate repetitive tasks</p>"));
        assert!(html.contains("data-testid=\"benefit-card-icon\""));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_regular_scale_when_not_mobile() {
        assert_eq!(props(false).scale(), CardScale::Regular);
        let html = render(props(false));
        assert!(html.contains("data-scale=\"regular\""));
        assert!(html.contains("p-8"));
        assert!(html.contains("w-8 h-8"));
        assert!(html.contains("text-xl"));
        assert!(!html.contains("text-lg"));
    }

    #[test]
    fn test_compact_scale_when_mobile() {
        assert_eq!(props(true).scale(), CardScale::Compact);
        let html = render(props(true));
        assert!(html.contains("data-scale=\"compact\""));
        assert!(html.contains("p-6"));
        assert!(html.contains("w-6 h-6"));
        assert!(html.contains("text-lg"));
        assert!(!html.contains("text-xl"));
    }

    #[test]
    fn test_starts_hidden_before_entering_viewport() {
        let html = render(props(false));
        assert!(html.contains("opacity: 0; transform: translateY(20px);"));
        assert!(html.contains("0.5s ease-out"));
    }

    #[test]
    fn test_animation_independent_of_inputs() {
        let mobile = render(props(true));
        let mut other = props(false);
        other.title = "Something else entirely".to_string();
        other.icon = LucideIcon::Shield.into();
        let desktop = render(other);
        let style = crate::animation::ENTRANCE.style(false);
        assert!(mobile.contains(&style));
        assert!(desktop.contains(&style));
    }

    #[test]
    fn test_identical_inputs_skip_render() {
        let first = props(false);
        let second = props(false);
        assert!(!second.needs_render(&first));
        assert_eq!(render(first), render(second));
    }

    #[test]
    fn test_changed_inputs_need_render() {
        let base = props(false);
        assert!(props(true).needs_render(&base));

        let mut retitled = props(false);
        retitled.title = "Save Money".to_string();
        assert!(retitled.needs_render(&base));

        let mut new_icon = props(false);
        new_icon.icon = LucideIcon::Zap.into();
        assert!(new_icon.needs_render(&base));
    }
}
