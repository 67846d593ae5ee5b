//! Reqwest-backed [`Transport`].
//!
//! Owns transport details only: URL resolution against the base, headers,
//! timeout, status mapping and JSON decoding into raw resources.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url, header};
use serde_json::Value;
use tracing::debug;

use crate::domain::links::resolve_href;
use crate::domain::raw::RawResource;
use crate::domain::repositories::Transport;
use crate::error::AppError;

const ACCEPT_HAL: &str = "application/hal+json, application/json";

/// HTTP transport against one API base URL.
///
/// Relative paths are appended to the base URL, absolute hrefs are requested
/// as they are. Requests are never retried.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Builds a transport with an explicit request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResource, AppError> {
        let url = resolve_href(&self.base_url, path)
            .map_err(|e| AppError::transport(format!("invalid URL for {path}: {e}")))?;
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header(header::ACCEPT, ACCEPT_HAL);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(path));
        }
        if !status.is_success() {
            return Err(map_status_error(status, &bytes));
        }

        parse_resource(&bytes)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<RawResource, AppError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<RawResource, AppError> {
        self.send(Method::POST, path, Some(body)).await
    }
}

/// Empty bodies (e.g. `201 Created` without content) decode as an empty resource.
fn parse_resource(body: &[u8]) -> Result<RawResource, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawResource::default());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::transport(format!("invalid JSON payload: {e}")))?;
    RawResource::from_value(value)
}

fn map_transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::transport(format!("request timed out: {error}"))
    } else {
        AppError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AppError {
    let preview = body_preview(body);
    if preview.is_empty() {
        AppError::transport(format!("status {}", status.as_u16()))
    } else {
        AppError::transport(format!("status {}: {preview}", status.as_u16()))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
