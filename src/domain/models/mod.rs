// Domain models (backend payloads)
// Pure Rust, no framework dependencies

pub mod greeting;
pub mod message;
pub mod search;
pub mod user;

pub use greeting::Greeting;
pub use message::{SendMessageRequest, SendMessageResponse};
pub use search::{Document, IndexList, IndexedDocument, SearchResult, is_visible_index};
pub use user::{InitUsersResponse, StatusMessage, User, UserCount, UserDraft};
