#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::{normalize_base_url, DashboardConfig};
use crate::domain::models::{
    Greeting, IndexList, IndexedDocument, InitUsersResponse, SearchResult, SendMessageRequest,
    SendMessageResponse, StatusMessage, User, UserCount, UserDraft,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_request, log_request_error, LogOperation};

pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

// API Service for centralized HTTP requests
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl PartialEq for ApiService {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_base_url(&DashboardConfig::default().backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_base_url(&config.backend_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    // Raw exchange: returns the status code and body text
    #[cfg(target_arch = "wasm32")]
    async fn execute(&self, method: Method, url: &str, body: Option<String>) -> Result<(u16, String)> {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };

        let response = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| AppError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok((status, text))
    }

    // Raw exchange: returns the status code and body text
    #[cfg(not(target_arch = "wasm32"))]
    async fn execute(&self, method: Method, url: &str, body: Option<String>) -> Result<(u16, String)> {
        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok((status, text))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        operation: LogOperation,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<T> {
        let url = self.url(endpoint);
        log_request(operation, method.as_str(), &url);

        let result = match self.execute(method, &url, body).await {
            Ok((status, text)) => decode_response(status, &text),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            log_request_error(operation, endpoint, e);
        }
        result
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, operation: LogOperation, endpoint: &str) -> Result<T> {
        self.request(operation, Method::Get, endpoint, None).await
    }

    // Generic POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        operation: LogOperation,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_string(body)?;
        self.request(operation, Method::Post, endpoint, Some(body)).await
    }

    // Generic PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        operation: LogOperation,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_string(body)?;
        self.request(operation, Method::Put, endpoint, Some(body)).await
    }

    // Generic DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, operation: LogOperation, endpoint: &str) -> Result<T> {
        self.request(operation, Method::Delete, endpoint, None).await
    }

    // Greeting

    pub async fn fetch_greeting(&self) -> Result<Greeting> {
        self.get(LogOperation::Greeting, "/api/hello").await
    }

    // Messaging

    pub async fn send_message(&self, text: &str) -> Result<SendMessageResponse> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_MESSAGE.to_string()));
        }
        self.post(
            LogOperation::Messaging,
            "/api/messages/send",
            &SendMessageRequest::new(text),
        )
        .await
    }

    pub async fn received_messages(&self) -> Result<Vec<String>> {
        self.get(LogOperation::Messaging, "/api/messages/received").await
    }

    // Search indices

    /// Visible index names (system indices removed)
    pub async fn list_indices(&self) -> Result<Vec<String>> {
        let list: IndexList = self
            .get(LogOperation::Search, "/api/elasticsearch/indices")
            .await?;
        Ok(list.visible_indices())
    }

    pub async fn search_index(&self, index: &str, size: u32) -> Result<SearchResult> {
        self.get(LogOperation::Search, &search_endpoint(index, size)).await
    }

    pub async fn index_document(&self, index: &str, document: &Value) -> Result<IndexedDocument> {
        let endpoint = format!("/api/elasticsearch/index/{}", urlencoding::encode(index));
        self.post(LogOperation::Search, &endpoint, document).await
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get(LogOperation::Users, "/api/users").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User> {
        self.get(LogOperation::Users, &user_endpoint(id)).await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        let draft = draft.validate()?;
        self.post(LogOperation::Users, "/api/users", &draft).await
    }

    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User> {
        let draft = draft.validate()?;
        self.put(LogOperation::Users, &user_endpoint(id), &draft).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<StatusMessage> {
        self.delete(LogOperation::Users, &user_endpoint(id)).await
    }

    pub async fn count_users(&self) -> Result<u64> {
        let count: UserCount = self.get(LogOperation::Users, "/api/users/count").await?;
        Ok(count.count)
    }

    /// Ask the backend to seed sample users when its table is empty
    pub async fn init_users(&self) -> Result<InitUsersResponse> {
        self.post(LogOperation::Users, "/api/users/init", &serde_json::json!({}))
            .await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn search_endpoint(index: &str, size: u32) -> String {
    format!(
        "/api/elasticsearch/search/{}?size={}",
        urlencoding::encode(index),
        size
    )
}

pub fn user_endpoint(id: i64) -> String {
    format!("/api/users/{}", id)
}

/// Map a status + body pair to a typed value or an error
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(AppError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = ApiService::with_base_url("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("/api/hello"), "http://localhost:8080/api/hello");
        assert_eq!(api.url("api/users"), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_empty_base_url_gives_same_origin_paths() {
        let api = ApiService::with_base_url("");
        assert_eq!(api.url("/api/hello"), "/api/hello");
    }

    #[test]
    fn test_search_endpoint_encodes_index() {
        assert_eq!(
            search_endpoint("logs-2024.12.01", 10),
            "/api/elasticsearch/search/logs-2024.12.01?size=10"
        );
        assert_eq!(
            search_endpoint("my index/x", 5),
            "/api/elasticsearch/search/my%20index%2Fx?size=5"
        );
    }

    #[test]
    fn test_user_endpoint() {
        assert_eq!(user_endpoint(42), "/api/users/42");
    }

    #[test]
    fn test_decode_response_success() {
        let greeting: Greeting = decode_response(200, r#"{"message":"Hello World!"}"#).unwrap();
        assert_eq!(greeting.message, "Hello World!");
    }

    #[test]
    fn test_decode_response_http_error() {
        let err = decode_response::<User>(409, r#"{"error":"Email already exists"}"#).unwrap_err();
        assert_eq!(
            err,
            AppError::Http {
                status: 409,
                detail: Some("Email already exists".to_string())
            }
        );
    }

    #[test]
    fn test_decode_response_bad_json() {
        let err = decode_response::<Vec<String>>(200, "not json").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
