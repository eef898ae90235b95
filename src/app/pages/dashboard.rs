use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{GreetingPanel, MessagePanel, SearchPanel, UserPanel};
use crate::config::DashboardConfig;
use crate::shared::hooks::{use_dashboard, use_polling};
use crate::shared::services::ApiService;

pub const TITLE: &str = "Hello World Frontend!";

/// Root component: provides configuration and the API service to the tree
#[component]
pub fn App() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = use_context_provider(DashboardConfig::from_env);
    let api_config = config.clone();
    use_context_provider(move || ApiService::from_config(&api_config));

    use_effect(move || {
        tracing::info!(backend_url = %config.backend_url, "Hello dashboard initialized");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Dashboard {}
    }
}

/// The four panels, loaded on mount and refreshed on a timer
#[component]
pub fn Dashboard() -> Element {
    let state = use_dashboard();
    use_context_provider(|| state);

    use_effect(move || state.load_all());

    // Only messages and search results change without user action
    let period = state.config.peek().refresh_interval;
    use_polling(period, move || state.refresh_live());

    rsx! {
        div { class: "c-container",
            h1 { class: "c-title", "{TITLE}" }
            GreetingPanel {}
            MessagePanel {}
            SearchPanel {}
            UserPanel {}
        }
    }
}
