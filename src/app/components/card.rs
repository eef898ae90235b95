use dioxus::prelude::*;

/// Colour scheme of a dashboard section
#[derive(Clone, Copy, PartialEq)]
pub enum PanelAccent {
    Greeting,
    Messages,
    Search,
    Users,
}

impl PanelAccent {
    pub fn modifier(&self) -> &'static str {
        match self {
            PanelAccent::Greeting => "c-card--greeting",
            PanelAccent::Messages => "c-card--messages",
            PanelAccent::Search => "c-card--search",
            PanelAccent::Users => "c-card--users",
        }
    }
}

#[component]
pub fn Card(
    title: Option<String>,
    accent: Option<PanelAccent>,
    children: Element,
) -> Element {
    let accent_class = accent.map(|a| a.modifier()).unwrap_or("");

    rsx! {
        section {
            class: "c-card {accent_class}",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    h2 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
