pub mod components;
pub mod pages;

// Re-export the dashboard App
pub use pages::dashboard::App;
