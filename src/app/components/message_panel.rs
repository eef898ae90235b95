use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, EmptyState, PanelAccent};
use crate::shared::hooks::DashboardState;
use crate::shared::state::can_send;

/// Publish a message and list what the consumer received
#[component]
pub fn MessagePanel() -> Element {
    let state = use_context::<DashboardState>();
    let mut draft = state.message_draft;
    let feed = state.feed.cloned();
    let sendable = can_send(&draft.read());

    rsx! {
        Card { title: "🐰 Messages".to_string(), accent: PanelAccent::Messages,
            div { class: "c-send-message",
                input {
                    r#type: "text",
                    class: "c-input",
                    placeholder: "Entrez un message...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeyup: move |evt| {
                        if evt.key() == Key::Enter {
                            state.send_message();
                        }
                    },
                }
                Button {
                    disabled: !sendable,
                    onclick: move |_| state.send_message(),
                    "Envoyer"
                }
            }

            div { class: "c-messages",
                h3 { class: "c-messages__title", "Messages reçus ({feed.len()}):" }

                if feed.is_empty() {
                    EmptyState { message: "Aucun message reçu pour le moment".to_string() }
                } else {
                    div { class: "c-messages__list",
                        for (number, text) in feed.numbered() {
                            div { key: "{number}", class: "c-message-item",
                                span { class: "c-message-item__number", "#{number}" }
                                span { class: "c-message-item__text", "{text}" }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Refresh,
                    onclick: move |_| state.fetch_received_messages(),
                    "🔄 Rafraîchir les messages"
                }
            }
        }
    }
}
