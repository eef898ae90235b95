use axum::{
    body::{Body, Bytes},
    extract::Extension,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::Response,
};
use reqwest::Client;

use crate::config::normalize_base_url;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_proxy;

/// Proxy configuration
#[derive(Clone, Debug)]
pub struct ProxyState {
    pub backend_url: String,
    pub client: Client,
}

impl ProxyState {
    /// The upstream must be an absolute `http(s)://` URL; the same-origin
    /// form (`/`) would make every forwarded request relative.
    pub fn new(backend_url: &str) -> Result<Self> {
        let backend_url = normalize_base_url(backend_url);
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "proxy upstream must be an absolute http(s) URL, got {:?}",
                backend_url
            )));
        }
        Ok(Self {
            backend_url,
            client: Client::new(),
        })
    }

    /// Backend URL for an incoming request: base URL + original path and query
    pub fn target_url(&self, uri: &Uri) -> String {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        format!("{}{}", self.backend_url, path_and_query)
    }
}

/// ANY /api/{*path}
/// Forward the request to the backend and stream its response back
pub async fn proxy_handler(
    Extension(state): Extension<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> std::result::Result<Response, StatusCode> {
    let url = state.target_url(&uri);

    let mut request = state.client.request(method.clone(), &url);
    for name in [header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value);
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let response = request.send().await.map_err(|e| {
        tracing::error!("Failed to proxy {} {}: {}", method, uri.path(), e);
        StatusCode::BAD_GATEWAY
    })?;

    let status = response.status();
    log_proxy(method.as_str(), uri.path(), status.as_u16());

    let mut builder = Response::builder().status(status);

    // Copy relevant headers
    for (key, value) in response.headers().iter() {
        if *key != header::CONTENT_LENGTH && *key != header::TRANSFER_ENCODING {
            builder = builder.header(key, value);
        }
    }

    builder
        .body(Body::from_stream(response.bytes_stream()))
        .map_err(|e| {
            tracing::error!("Failed to build proxied response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
