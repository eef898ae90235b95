use dioxus::prelude::*;

use crate::app::components::{Button, Card, ErrorMessage, LoadingText, PanelAccent};
use crate::shared::hooks::DashboardState;

/// Backend greeting with a manual refresh
#[component]
pub fn GreetingPanel() -> Element {
    let state = use_context::<DashboardState>();
    let view = state.greeting.cloned();
    let pending = view.message.is_empty() && view.error.is_empty();

    rsx! {
        Card { title: "Message du Backend:".to_string(), accent: PanelAccent::Greeting,
            if !view.message.is_empty() {
                p { class: "c-greeting__message", "{view.message}" }
            }
            if !view.error.is_empty() {
                ErrorMessage { message: view.error.clone() }
            }
            if pending {
                LoadingText { message: "Chargement...".to_string() }
            }
            Button { onclick: move |_| state.fetch_greeting(), "Rafraîchir" }
        }
    }
}
