// Custom Dioxus hooks
pub mod use_dashboard;
pub mod use_polling;

pub use use_dashboard::{use_dashboard, DashboardState};
pub use use_polling::use_polling;
