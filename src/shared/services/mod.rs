// Shared services
// ApiService talks to the backend with gloo-net in the browser and reqwest natively
pub mod api_service;
// Request sequences of the dashboard actions, driven by use_dashboard
pub mod dashboard;

pub use api_service::ApiService;
