//! API utilities for frontend-backend communication
//!
//! Provides the base URL of the backend, the error type shared by every
//! API module and thin JSON helpers that attach the bearer token.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::config::{base_from_location, config};
use crate::system::auth::storage;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Failed to send request: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::Status { status: 401, .. }
        )
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - `SELLER_API_BASE` if it was set at build time
/// - otherwise a URL like "http://localhost:3000" built from the window location
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = config().api_base_override {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn auth_header() -> Result<String, ApiError> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    Ok(builder.header("Authorization", &auth_header()?))
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| extract_message(&body))
        .unwrap_or_else(|| response.status_text());
    if status == 401 {
        log::warn!("backend rejected the access token, clearing session");
        storage::expire_session();
    }
    Err(ApiError::Status { status, message })
}

/// Pulls a human readable message out of an error body.
///
/// Understands `{"message": ..}` and `{"error": ..}`; plain text bodies are
/// returned as is.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["message", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string),
        Err(_) => Some(body.to_string()),
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(&api_url(path)))?.send().await?;
    parse_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    parse_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = authorized(Request::put(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    parse_json(response).await
}

/// PUT that ignores the response body.
pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = authorized(Request::put(&api_url(path)))?
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    check_status(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&api_url(path)))?.send().await?;
    check_status(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message":"SKU already exists"}"#).as_deref(),
            Some("SKU already exists")
        );
        assert_eq!(
            extract_message(r#"{"error":"forbidden"}"#).as_deref(),
            Some("forbidden")
        );
        assert_eq!(extract_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
        assert_eq!(extract_message(r#"{"code":7}"#), None);
        assert_eq!(extract_message("  "), None);
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(ApiError::Status {
            status: 401,
            message: String::new()
        }
        .is_unauthorized());
        assert!(!ApiError::Decode("eof".into()).is_unauthorized());
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            message: "Product not found".into(),
        };
        assert_eq!(err.to_string(), "Server returned 404: Product not found");
    }
}
