use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, DeleteButton, EmptyState, PanelAccent};
use crate::domain::models::User;
use crate::shared::hooks::DashboardState;

/// User records: creation form, list with inline edit and delete
#[component]
pub fn UserPanel() -> Element {
    let state = use_context::<DashboardState>();
    let mut new_user = state.new_user;
    let form = new_user.cloned();
    let directory = state.directory.cloned();

    rsx! {
        Card { title: "🐘 Utilisateurs".to_string(), accent: PanelAccent::Users,
            div { class: "c-user-form",
                input {
                    r#type: "text",
                    class: "c-input c-input--user",
                    placeholder: "Nom complet...",
                    value: "{form.name}",
                    oninput: move |evt| { new_user.write().name = evt.value(); },
                }
                input {
                    r#type: "email",
                    class: "c-input c-input--user",
                    placeholder: "Email...",
                    value: "{form.email}",
                    oninput: move |evt| { new_user.write().email = evt.value(); },
                    onkeyup: move |evt| {
                        if evt.key() == Key::Enter {
                            state.create_user();
                        }
                    },
                }
                Button {
                    disabled: !form.is_complete(),
                    onclick: move |_| state.create_user(),
                    "➕ Ajouter"
                }
            }

            div { class: "c-users",
                h3 { class: "c-users__title", "Utilisateurs ({directory.users.len()}):" }
                if let Some(count) = directory.count {
                    p { class: "c-users__count", "En base: {count}" }
                }

                if directory.users.is_empty() {
                    EmptyState { message: "Aucun utilisateur dans la base de données".to_string() }
                } else {
                    div { class: "c-users__list",
                        for user in directory.users.iter() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                editing: directory.is_editing(user.id),
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Refresh,
                    onclick: move |_| state.fetch_users(),
                    "🔄 Rafraîchir"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    title: "Créer les utilisateurs d'exemple si la table est vide".to_string(),
                    onclick: move |_| state.init_users(),
                    "Données d'exemple"
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, editing: bool) -> Element {
    let state = use_context::<DashboardState>();
    let id = user.id;

    if editing {
        let mut edit_user = state.edit_user;
        let form = edit_user.cloned();

        return rsx! {
            div { class: "c-user-item c-user-item--editing",
                div { class: "c-user-item__edit",
                    input {
                        r#type: "text",
                        class: "c-input c-input--compact",
                        value: "{form.name}",
                        oninput: move |evt| { edit_user.write().name = evt.value(); },
                    }
                    input {
                        r#type: "email",
                        class: "c-input c-input--compact",
                        value: "{form.email}",
                        oninput: move |evt| { edit_user.write().email = evt.value(); },
                        onkeyup: move |evt| {
                            if evt.key() == Key::Enter {
                                state.update_user(id);
                            }
                        },
                    }
                }
                div { class: "c-user-item__actions",
                    Button {
                        disabled: !form.is_complete(),
                        title: "Enregistrer".to_string(),
                        onclick: move |_| state.update_user(id),
                        "💾"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        title: "Annuler".to_string(),
                        onclick: move |_| state.cancel_edit(),
                        "✖"
                    }
                }
            }
        };
    }

    let created = user.created_label();

    rsx! {
        div { class: "c-user-item",
            div { class: "c-user-item__info",
                span { class: "c-user-item__name", "{user.name}" }
                span { class: "c-user-item__email", "{user.email}" }
                span { class: "c-user-item__date", "{created}" }
            }
            div { class: "c-user-item__actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    title: "Modifier".to_string(),
                    onclick: move |_| state.start_edit(id),
                    "✏️"
                }
                DeleteButton { on_confirm: move |_| state.delete_user(id) }
            }
        }
    }
}
