//! Request sequences behind the dashboard actions.
//!
//! Each function issues the requests of one action in the order the panels
//! rely on and hands back the outcomes; `use_dashboard` only moves them into
//! signals.

use std::time::Duration;

use crate::domain::models::{Greeting, InitUsersResponse, SearchResult, User};
use crate::shared::errors::Result;
use crate::shared::logging::{log_mutation, LogOperation};
use crate::shared::services::ApiService;
use crate::shared::utils::sleep;

/// Search `index` when one is selected; `None` means no request was made
pub async fn search(api: &ApiService, index: Option<&str>, size: u32) -> Option<Result<SearchResult>> {
    match index {
        Some(index) => Some(api.search_index(index, size).await),
        None => None,
    }
}

/// Outcome of one auto-refresh tick
#[derive(Debug)]
pub struct LiveRefresh {
    pub messages: Result<Vec<String>>,
    pub search: Option<Result<SearchResult>>,
}

/// Received messages and search results, requested together
pub async fn refresh_live(api: &ApiService, index: Option<&str>, size: u32) -> LiveRefresh {
    let (messages, search) = futures::join!(api.received_messages(), search(api, index, size));
    LiveRefresh { messages, search }
}

#[derive(Debug)]
pub struct UserListing {
    pub users: Result<Vec<User>>,
    /// `None` when the count was not requested
    pub count: Option<Result<u64>>,
}

/// User list, followed by `GET /api/users/count` when `with_count` is set.
///
/// The count endpoint is only worth a request on load and on an explicit
/// refresh; after a mutation the re-read list length is the count.
pub async fn list_users(api: &ApiService, with_count: bool) -> UserListing {
    let users = api.list_users().await;
    let count = if with_count {
        Some(api.count_users().await)
    } else {
        None
    };
    UserListing { users, count }
}

/// Seed the sample users, then re-read the list (with count) once seeding succeeded
pub async fn seed_users(api: &ApiService) -> Result<(InitUsersResponse, UserListing)> {
    let resp = api.init_users().await?;
    log_mutation(LogOperation::Users, "init", &resp.message);
    Ok((resp, list_users(api, true).await))
}

/// Everything the dashboard shows on mount
#[derive(Debug)]
pub struct InitialLoad {
    pub greeting: Result<Greeting>,
    pub messages: Result<Vec<String>>,
    pub indices: Result<Vec<String>>,
    pub search: Option<Result<SearchResult>>,
    pub users: UserListing,
    pub seeded: Result<(InitUsersResponse, UserListing)>,
}

/// Every panel concurrently, then the sample-user seeding
pub async fn initial_load(api: &ApiService, index: Option<&str>, size: u32) -> InitialLoad {
    let (greeting, messages, indices, search, users) = futures::join!(
        api.fetch_greeting(),
        api.received_messages(),
        api.list_indices(),
        search(api, index, size),
        list_users(api, true),
    );
    let seeded = seed_users(api).await;

    InitialLoad {
        greeting,
        messages,
        indices,
        search,
        users,
        seeded,
    }
}

/// Send `text`, then call `on_sent`, wait `delay` and re-read the received
/// messages. `Err` is the send failure; a failed re-read gives `Ok(None)`.
pub async fn send_then_refresh(
    api: &ApiService,
    text: &str,
    delay: Duration,
    on_sent: impl FnOnce(),
) -> Result<Option<Vec<String>>> {
    let resp = api.send_message(text).await?;
    log_mutation(LogOperation::Messaging, "send", &resp.status);
    on_sent();

    sleep(delay).await;
    Ok(api.received_messages().await.ok())
}
