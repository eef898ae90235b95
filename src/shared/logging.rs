//! Structured logging module for the Hello dashboard
//!
//! Provides consistent, contextual logging across the UI, the proxy and the CLI.
//! Every event carries an `operation` field so logs can be filtered per panel.

use crate::shared::errors::AppError;

/// Logical endpoint group an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOperation {
    Greeting,
    Messaging,
    Search,
    Users,
    Polling,
    Proxy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Greeting => "greeting",
            LogOperation::Messaging => "messaging",
            LogOperation::Search => "search",
            LogOperation::Users => "users",
            LogOperation::Polling => "polling",
            LogOperation::Proxy => "proxy",
        }
    }
}

/// Log an outgoing backend request
pub fn log_request(operation: LogOperation, method: &str, url: &str) {
    tracing::debug!(
        operation = operation.as_str(),
        method = method,
        url = url,
        "Backend request"
    );
}

/// Log a request that came back with a usable response
pub fn log_request_success(operation: LogOperation, endpoint: &str, items: usize) {
    tracing::debug!(
        operation = operation.as_str(),
        endpoint = endpoint,
        items = items,
        "Backend request succeeded"
    );
}

/// Log a failed request
pub fn log_request_error(operation: LogOperation, endpoint: &str, error: &AppError) {
    tracing::error!(
        operation = operation.as_str(),
        endpoint = endpoint,
        status = error.status(),
        error = %error,
        "Backend request failed"
    );
}

/// Log a completed write (send, create, update, delete, init)
pub fn log_mutation(operation: LogOperation, action: &str, target: &str) {
    tracing::info!(
        operation = operation.as_str(),
        action = action,
        target = target,
        "Backend state changed"
    );
}

/// Log a tick of the auto-refresh timer
pub fn log_poll_tick(period_ms: u128) {
    tracing::trace!(
        operation = LogOperation::Polling.as_str(),
        period_ms = period_ms as u64,
        "Auto-refresh tick"
    );
}

/// Log a proxied request and the status it produced
pub fn log_proxy(method: &str, path: &str, status: u16) {
    tracing::info!(
        operation = LogOperation::Proxy.as_str(),
        method = method,
        path = path,
        status = status,
        "Proxied backend request"
    );
}
