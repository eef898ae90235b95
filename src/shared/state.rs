//! View models bound to the dashboard panels.
//!
//! Each view is replaced wholesale by a successful fetch; none of them owns any
//! backend state. They are plain Rust so the UI hooks stay thin.

use crate::domain::models::{Document, Greeting, SearchResult, User, UserDraft};
use crate::shared::errors::{AppError, Result};

pub const BACKEND_UNREACHABLE_PREFIX: &str = "Erreur de connexion au backend";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreetingView {
    pub message: String,
    pub error: String,
}

impl GreetingView {
    pub fn begin(&mut self) {
        self.message.clear();
        self.error.clear();
    }

    pub fn succeed(&mut self, greeting: Greeting) {
        self.message = greeting.message;
    }

    pub fn fail(&mut self, error: &AppError) {
        self.error = format!("{}: {}", BACKEND_UNREACHABLE_PREFIX, error);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageFeed {
    pub messages: Vec<String>,
}

impl MessageFeed {
    pub fn replace(&mut self, messages: Vec<String>) {
        self.messages = messages;
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Display number of the message at `position` (first row gets the highest number)
    pub fn number_of(&self, position: usize) -> usize {
        self.messages.len().saturating_sub(position)
    }

    /// Rows as `(number, text)` in display order
    pub fn numbered(&self) -> Vec<(usize, String)> {
        self.messages
            .iter()
            .enumerate()
            .map(|(i, text)| (self.number_of(i), text.clone()))
            .collect()
    }
}

/// A message may be sent only when it contains something other than whitespace
pub fn can_send(text: &str) -> bool {
    !text.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    pub indices: Vec<String>,
    pub selected: String,
    pub total: u64,
    pub documents: Vec<Document>,
}

impl SearchView {
    pub fn new(default_index: impl Into<String>) -> Self {
        Self {
            selected: default_index.into(),
            ..Self::default()
        }
    }

    /// Store the index list; the first one becomes selected only if nothing is
    pub fn apply_indices(&mut self, indices: Vec<String>) {
        self.indices = indices;
        if self.selected.is_empty() {
            if let Some(first) = self.indices.first() {
                self.selected = first.clone();
            }
        }
    }

    pub fn select(&mut self, index: impl Into<String>) {
        self.selected = index.into();
    }

    /// Index to search, `None` when no index is selected
    pub fn query(&self) -> Option<&str> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.as_str())
        }
    }

    pub fn apply_results(&mut self, result: SearchResult) {
        self.total = result.total;
        self.documents = result.documents;
    }

    pub fn clear_results(&mut self) {
        self.total = 0;
        self.documents.clear();
    }

    /// A failed search empties the panel instead of keeping stale hits
    pub fn apply_search(&mut self, result: Result<SearchResult>) {
        match result {
            Ok(result) => self.apply_results(result),
            Err(_) => self.clear_results(),
        }
    }

    /// Options for the selector; the current selection is listed even when the
    /// backend did not return it yet.
    pub fn options(&self) -> Vec<String> {
        let mut options = self.indices.clone();
        if !self.selected.is_empty() && !options.contains(&self.selected) {
            options.insert(0, self.selected.clone());
        }
        options
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    pub users: Vec<User>,
    pub editing: Option<i64>,
    pub count: Option<u64>,
}

impl UserDirectory {
    /// Replace the list; an edit in progress is dropped if its user disappeared
    pub fn replace(&mut self, users: Vec<User>) {
        if let Some(id) = self.editing {
            if !users.iter().any(|u| u.id == id) {
                self.editing = None;
            }
        }
        self.users = users;
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Start editing a user and return its current values
    pub fn start_edit(&mut self, id: i64) -> Option<UserDraft> {
        let draft = self.find(id).map(User::to_draft)?;
        self.editing = Some(id);
        Some(draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Current values of the user being edited, if any
    pub fn editing_draft(&self) -> Option<UserDraft> {
        self.editing.and_then(|id| self.find(id)).map(User::to_draft)
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing == Some(id)
    }

    pub fn set_count(&mut self, count: u64) {
        self.count = Some(count);
    }

    /// Replace the list; without a backend count the list length is used
    pub fn apply_listing(&mut self, users: Vec<User>, count: Option<u64>) {
        let count = count.unwrap_or(users.len() as u64);
        self.replace(users);
        self.set_count(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: None,
        }
    }

    #[test]
    fn test_greeting_view_lifecycle() {
        let mut view = GreetingView::default();
        view.succeed(Greeting {
            message: "Hello World!".to_string(),
        });
        assert_eq!(view.message, "Hello World!");

        view.begin();
        assert_eq!(view, GreetingView::default());

        view.fail(&AppError::Network("connection refused".to_string()));
        assert_eq!(
            view.error,
            "Erreur de connexion au backend: Network error: connection refused"
        );
        assert!(view.message.is_empty());
    }

    #[test]
    fn test_message_numbering_counts_down() {
        let mut feed = MessageFeed::default();
        assert!(feed.is_empty());

        feed.replace(vec!["c".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(feed.len(), 3);
        assert_eq!(
            feed.numbered(),
            vec![(3, "c".to_string()), (2, "b".to_string()), (1, "a".to_string())]
        );
    }

    #[test]
    fn test_message_numbers_stay_with_their_text() {
        let mut feed = MessageFeed::default();
        feed.replace(vec!["b".to_string(), "a".to_string()]);
        let before = feed.numbered();

        feed.replace(vec!["c".to_string(), "b".to_string(), "a".to_string()]);
        let after = feed.numbered();

        assert_eq!(after[0], (3, "c".to_string()));
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn test_can_send() {
        assert!(can_send("hello"));
        assert!(!can_send(""));
        assert!(!can_send("   \t"));
    }

    #[test]
    fn test_apply_indices_keeps_existing_selection() {
        let mut view = SearchView::new("logs-2024.12.01");
        view.apply_indices(vec!["users".to_string(), "orders".to_string()]);
        assert_eq!(view.selected, "logs-2024.12.01");
        assert_eq!(view.query(), Some("logs-2024.12.01"));
    }

    #[test]
    fn test_apply_indices_selects_first_when_empty() {
        let mut view = SearchView::new("");
        assert_eq!(view.query(), None);

        view.apply_indices(Vec::new());
        assert_eq!(view.query(), None);

        view.apply_indices(vec!["users".to_string(), "orders".to_string()]);
        assert_eq!(view.query(), Some("users"));
    }

    #[test]
    fn test_options_include_current_selection() {
        let mut view = SearchView::new("logs-2024.12.01");
        view.apply_indices(vec!["users".to_string()]);
        assert_eq!(view.options(), vec!["logs-2024.12.01", "users"]);

        view.select("users");
        assert_eq!(view.options(), vec!["users"]);
    }

    #[test]
    fn test_results_replace_and_clear() {
        let mut view = SearchView::new("users");
        view.apply_results(SearchResult {
            total: 3,
            documents: vec![Document {
                id: "1".to_string(),
                source: json!({ "name": "Alice" }),
            }],
        });
        assert_eq!(view.total, 3);
        assert_eq!(view.documents.len(), 1);

        view.clear_results();
        assert_eq!(view.total, 0);
        assert!(view.documents.is_empty());
        assert_eq!(view.selected, "users");
    }

    #[test]
    fn test_failed_search_clears_results() {
        let mut view = SearchView::new("users");
        view.apply_search(Ok(SearchResult {
            total: 1,
            documents: vec![Document {
                id: "1".to_string(),
                source: json!({}),
            }],
        }));
        assert_eq!(view.total, 1);

        view.apply_search(Err(AppError::from_status(500, "")));
        assert_eq!(view.total, 0);
        assert!(view.documents.is_empty());
    }

    #[test]
    fn test_user_directory_editing() {
        let mut dir = UserDirectory::default();
        dir.replace(vec![user(1, "Alice"), user(2, "Bob")]);

        let draft = dir.start_edit(2).unwrap();
        assert_eq!(draft, UserDraft::new("Bob", "bob@example.com"));
        assert!(dir.is_editing(2));
        assert!(!dir.is_editing(1));

        assert!(dir.start_edit(99).is_none());
        assert!(dir.is_editing(2));
        assert_eq!(dir.editing_draft(), Some(UserDraft::new("Bob", "bob@example.com")));

        dir.cancel_edit();
        assert_eq!(dir.editing, None);
        assert_eq!(dir.editing_draft(), None);
    }

    #[test]
    fn test_replace_drops_edit_of_removed_user() {
        let mut dir = UserDirectory::default();
        dir.replace(vec![user(1, "Alice"), user(2, "Bob")]);
        dir.start_edit(2);

        dir.replace(vec![user(1, "Alice"), user(2, "Robert")]);
        assert!(dir.is_editing(2));

        dir.replace(vec![user(1, "Alice")]);
        assert_eq!(dir.editing, None);
        assert_eq!(dir.users.len(), 1);
    }

    #[test]
    fn test_user_count() {
        let mut dir = UserDirectory::default();
        assert_eq!(dir.count, None);
        dir.set_count(3);
        assert_eq!(dir.count, Some(3));

        dir.apply_listing(vec![user(1, "Alice"), user(2, "Bob")], None);
        assert_eq!(dir.count, Some(2));

        dir.apply_listing(vec![user(1, "Alice")], Some(7));
        assert_eq!(dir.count, Some(7));
        assert_eq!(dir.users.len(), 1);
    }
}
