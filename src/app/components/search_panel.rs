use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, EmptyState, PanelAccent};
use crate::domain::models::Document;
use crate::shared::hooks::DashboardState;

/// Index selector and the latest documents of the selected index
#[component]
pub fn SearchPanel() -> Element {
    let state = use_context::<DashboardState>();
    let view = state.search.cloned();

    rsx! {
        Card { title: "🔍 Index de recherche".to_string(), accent: PanelAccent::Search,
            div { class: "c-index-selector",
                label { r#for: "index-select", "Index:" }
                select {
                    id: "index-select",
                    class: "c-select",
                    onchange: move |evt| state.select_index(evt.value()),
                    for index in view.options() {
                        option {
                            key: "{index}",
                            value: "{index}",
                            selected: index == view.selected,
                            "{index}"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Refresh,
                    onclick: move |_| {
                        state.fetch_indices();
                        state.run_search();
                    },
                    "🔄 Rafraîchir"
                }
            }

            p { class: "c-search-stats", "Total: {view.total} documents" }

            if view.documents.is_empty() {
                EmptyState { message: "Aucun document trouvé dans cet index".to_string() }
            } else {
                div { class: "c-search-results",
                    for document in view.documents.iter() {
                        DocumentItem { key: "{document.id}", document: document.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn DocumentItem(document: Document) -> Element {
    let body = document.pretty_source();

    rsx! {
        div { class: "c-document",
            div { class: "c-document__id", "ID: {document.id}" }
            pre { class: "c-document__content", "{body}" }
        }
    }
}
