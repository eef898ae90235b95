use dioxus::prelude::*;

pub const DELETE_USER_CONFIRM: &str = "Êtes-vous sûr de vouloir supprimer cet utilisateur ?";

/// Delete button with confirmation overlay
/// Uses CSS classes: c-delete-btn, c-delete-btn__confirm-overlay, etc.
#[component]
pub fn DeleteButton(
    /// Called when deletion is confirmed
    on_confirm: EventHandler<()>,
    #[props(default = DELETE_USER_CONFIRM)]
    confirm_text: &'static str,
) -> Element {
    let mut show_confirm = use_signal(|| false);

    rsx! {
        div { class: "c-delete-btn__wrapper",
            button {
                class: "c-delete-btn",
                title: "Supprimer",
                onclick: move |evt| {
                    evt.stop_propagation();
                    show_confirm.set(true);
                },
                "🗑️"
            }

            if *show_confirm.read() {
                div { class: "c-delete-btn__confirm-overlay",
                    span { class: "c-delete-btn__confirm-text", "{confirm_text}" }
                    div { class: "c-delete-btn__confirm-actions",
                        button {
                            class: "c-delete-btn__confirm-btn c-delete-btn__confirm-btn--danger",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                show_confirm.set(false);
                                on_confirm.call(());
                            },
                            "Oui"
                        }
                        button {
                            class: "c-delete-btn__confirm-btn c-delete-btn__confirm-btn--cancel",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                show_confirm.set(false);
                            },
                            "Non"
                        }
                    }
                }
            }
        }
    }
}
