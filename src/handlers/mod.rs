/// Reverse proxy forwarding `/api/*` to the backend
pub mod proxy;

pub use proxy::{proxy_handler, ProxyState};
