use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::models::{SearchResult, UserDraft};
use crate::shared::errors::Result;
use crate::shared::logging::{log_mutation, log_request_success, LogOperation};
use crate::shared::services::dashboard::{self, UserListing};
use crate::shared::services::ApiService;
use crate::shared::state::{can_send, GreetingView, MessageFeed, SearchView, UserDirectory};
use crate::shared::utils::alert;

pub const SEND_FAILED: &str = "Erreur lors de l'envoi du message";
pub const CREATE_FAILED: &str = "Impossible de créer l'utilisateur";
pub const UPDATE_FAILED: &str = "Impossible de modifier l'utilisateur";
pub const DELETE_FAILED: &str = "Erreur lors de la suppression";

/// Dashboard state: one signal per panel plus the form inputs.
///
/// `Copy`, so event handlers can capture it freely. Every action reads its
/// inputs with `peek()` so calling one from an effect does not subscribe it.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub api: Signal<ApiService>,
    pub config: Signal<DashboardConfig>,
    pub greeting: Signal<GreetingView>,
    pub feed: Signal<MessageFeed>,
    pub message_draft: Signal<String>,
    pub search: Signal<SearchView>,
    pub directory: Signal<UserDirectory>,
    pub new_user: Signal<UserDraft>,
    pub edit_user: Signal<UserDraft>,
}

impl DashboardState {
    fn api(&self) -> ApiService {
        ApiService::clone(&self.api.peek())
    }

    fn search_query(&self) -> Option<String> {
        self.search.peek().query().map(str::to_string)
    }

    /// Initial load: every panel, then the sample-user seeding
    pub fn load_all(self) {
        let api = self.api();
        let index = self.search_query();
        let size = self.config.peek().search_size;
        let mut greeting = self.greeting;
        let mut search = self.search;
        greeting.write().begin();

        spawn(async move {
            let load = dashboard::initial_load(&api, index.as_deref(), size).await;

            match load.greeting {
                Ok(g) => greeting.write().succeed(g),
                Err(e) => greeting.write().fail(&e),
            }
            self.apply_messages(load.messages);
            if let Ok(indices) = load.indices {
                log_request_success(LogOperation::Search, "/api/elasticsearch/indices", indices.len());
                search.write().apply_indices(indices);
            }
            let searched = load.search.is_some();
            self.apply_search(load.search);
            self.apply_users(load.users);
            if let Ok((_, listing)) = load.seeded {
                self.apply_users(listing);
            }

            // the index list may have supplied the first selection
            if !searched {
                self.run_search();
            }
        });
    }

    /// Auto-refresh tick
    pub fn refresh_live(self) {
        let api = self.api();
        let index = self.search_query();
        let size = self.config.peek().search_size;

        spawn(async move {
            let tick = dashboard::refresh_live(&api, index.as_deref(), size).await;
            self.apply_messages(tick.messages);
            self.apply_search(tick.search);
        });
    }

    fn apply_messages(self, messages: Result<Vec<String>>) {
        let mut feed = self.feed;
        // failures are logged by ApiService, the list keeps its last value
        if let Ok(messages) = messages {
            log_request_success(LogOperation::Messaging, "/api/messages/received", messages.len());
            feed.write().replace(messages);
        }
    }

    fn apply_search(self, outcome: Option<Result<SearchResult>>) {
        let mut search = self.search;
        if let Some(result) = outcome {
            search.write().apply_search(result);
        }
    }

    fn apply_users(self, listing: UserListing) {
        let mut directory = self.directory;
        if let Ok(users) = listing.users {
            log_request_success(LogOperation::Users, "/api/users", users.len());
            let count = listing.count.and_then(|count| count.ok());
            directory.write().apply_listing(users, count);
        }
    }

    // Greeting

    pub fn fetch_greeting(self) {
        let api = self.api();
        let mut greeting = self.greeting;
        greeting.write().begin();

        spawn(async move {
            match api.fetch_greeting().await {
                Ok(g) => greeting.write().succeed(g),
                Err(e) => greeting.write().fail(&e),
            }
        });
    }

    // Messaging

    pub fn fetch_received_messages(self) {
        let api = self.api();

        spawn(async move {
            self.apply_messages(api.received_messages().await);
        });
    }

    pub fn send_message(self) {
        let text = self.message_draft.peek().to_string();
        if !can_send(&text) {
            return;
        }

        let api = self.api();
        let delay = self.config.peek().send_refresh_delay;
        let mut draft = self.message_draft;

        spawn(async move {
            let sent = dashboard::send_then_refresh(&api, &text, delay, move || {
                draft.set(String::new())
            })
            .await;
            match sent {
                Ok(Some(messages)) => self.apply_messages(Ok(messages)),
                Ok(None) => {}
                Err(_) => alert(SEND_FAILED),
            }
        });
    }

    // Search

    pub fn fetch_indices(self) {
        let api = self.api();
        let mut search = self.search;

        spawn(async move {
            if let Ok(indices) = api.list_indices().await {
                log_request_success(LogOperation::Search, "/api/elasticsearch/indices", indices.len());
                search.write().apply_indices(indices);
            }
        });
    }

    pub fn select_index(self, index: String) {
        let mut search = self.search;
        search.write().select(index);
        self.run_search();
    }

    /// Search the selected index; no request when nothing is selected
    pub fn run_search(self) {
        let Some(index) = self.search_query() else {
            return;
        };
        let size = self.config.peek().search_size;
        let api = self.api();

        spawn(async move {
            let outcome = dashboard::search(&api, Some(&index), size).await;
            if let Some(Ok(result)) = &outcome {
                log_request_success(LogOperation::Search, &index, result.documents.len());
            }
            self.apply_search(outcome);
        });
    }

    // Users

    /// Explicit refresh: list and backend count
    pub fn fetch_users(self) {
        self.load_users(true);
    }

    /// Re-read after a mutation; the count follows the list length
    fn reload_users(self) {
        self.load_users(false);
    }

    fn load_users(self, with_count: bool) {
        let api = self.api();

        spawn(async move {
            self.apply_users(dashboard::list_users(&api, with_count).await);
        });
    }

    pub fn init_users(self) {
        let api = self.api();

        spawn(async move {
            if let Ok((_, listing)) = dashboard::seed_users(&api).await {
                self.apply_users(listing);
            }
        });
    }

    pub fn create_user(self) {
        let draft = match self.new_user.peek().validate() {
            Ok(draft) => draft,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let api = self.api();
        let mut form = self.new_user;

        spawn(async move {
            match api.create_user(&draft).await {
                Ok(user) => {
                    log_mutation(LogOperation::Users, "create", &user.email);
                    form.set(UserDraft::default());
                    self.reload_users();
                }
                Err(e) => alert(&e.user_message(CREATE_FAILED)),
            }
        });
    }

    pub fn start_edit(self, id: i64) {
        let mut directory = self.directory;
        let mut edit_user = self.edit_user;
        let draft = directory.write().start_edit(id);
        if let Some(draft) = draft {
            edit_user.set(draft);
        }
    }

    pub fn cancel_edit(self) {
        let mut directory = self.directory;
        let mut edit_user = self.edit_user;
        directory.write().cancel_edit();
        edit_user.set(UserDraft::default());
    }

    pub fn update_user(self, id: i64) {
        let draft = match self.edit_user.peek().validate() {
            Ok(draft) => draft,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let api = self.api();

        spawn(async move {
            match api.update_user(id, &draft).await {
                Ok(user) => {
                    log_mutation(LogOperation::Users, "update", &user.email);
                    self.cancel_edit();
                    self.reload_users();
                }
                Err(e) => alert(&e.user_message(UPDATE_FAILED)),
            }
        });
    }

    pub fn delete_user(self, id: i64) {
        let api = self.api();

        spawn(async move {
            match api.delete_user(id).await {
                Ok(_) => {
                    log_mutation(LogOperation::Users, "delete", &id.to_string());
                    self.reload_users();
                }
                Err(_) => alert(DELETE_FAILED),
            }
        });
    }
}

/// Hook to build the dashboard state from the context-provided service and config
pub fn use_dashboard() -> DashboardState {
    let api = use_context::<ApiService>();
    let config = use_context::<DashboardConfig>();
    let default_index = config.default_index.clone();

    DashboardState {
        api: use_signal(move || api),
        config: use_signal(move || config),
        greeting: use_signal(GreetingView::default),
        feed: use_signal(MessageFeed::default),
        message_draft: use_signal(String::new),
        search: use_signal(move || SearchView::new(default_index)),
        directory: use_signal(UserDirectory::default),
        new_user: use_signal(UserDraft::default),
        edit_user: use_signal(UserDraft::default),
    }
}
