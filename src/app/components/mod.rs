pub mod button;
pub mod card;
pub mod common;
pub mod delete_button;

// Dashboard panels
pub mod greeting_panel;
pub mod message_panel;
pub mod search_panel;
pub mod user_panel;

pub use button::{Button, ButtonVariant};
pub use card::{Card, PanelAccent};
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use delete_button::DeleteButton;
pub use greeting_panel::GreetingPanel;
pub use message_panel::MessagePanel;
pub use search_panel::SearchPanel;
pub use user_panel::UserPanel;
