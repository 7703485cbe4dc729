//! HTTP client for the passenger data service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    types::{ErrorBody, ResponsePayload, ServiceStatus},
    Error,
};

/// Path of the passenger listing endpoint.
pub const DATA_PATH: &str = "/api/data";

/// Path of the service health endpoint.
pub const STATUS_PATH: &str = "/api/status";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the passenger data service.
///
/// Holds a single `reqwest::Client` so connections are reused across
/// loads. Requests carry no retry logic: one failed attempt is reported
/// as-is to the caller.
pub struct Client {
    /// Base URL for the service, e.g. `http://localhost:8080`.
    base_api_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at a service on `http://localhost:8080`.
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:8080")
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL and request timeout.
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build tuned HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })
    }

    /// Sends a GET to `path` and returns once the status line and headers
    /// have arrived. The body is left unread so callers can react to "a
    /// response arrived" before anything else happens.
    pub async fn fetch(&self, path: &str) -> Result<PendingResponse, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("GET {}", url);
        let inner = self
            .http
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::transport(&e)
            })?;

        Ok(PendingResponse {
            status: inner.status().as_u16(),
            inner,
        })
    }

    /// Fetches the passenger listing.
    pub async fn get_data(&self) -> Result<ResponsePayload, Error> {
        self.fetch(DATA_PATH).await?.into_payload().await
    }

    /// Fetches the service health document.
    pub async fn get_status(&self) -> Result<ServiceStatus, Error> {
        self.fetch(STATUS_PATH).await?.into_json().await
    }
}

/// A response whose headers have arrived but whose body is still unread.
#[derive(Debug)]
pub struct PendingResponse {
    status: u16,
    inner: reqwest::Response,
}

impl PendingResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Judges the status first: a non-success status becomes
    /// [`Error::HttpStatus`] whatever happens to the body, which is only read
    /// best-effort for the log. On success the body is read and parsed.
    pub async fn into_json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let body = self.into_checked_body().await?;
        parse_json(&body)
    }

    /// Like [`into_json`](Self::into_json), for the passenger payload.
    /// Falsy documents (`null`, `false`, `0`, `""`) yield an empty payload.
    pub async fn into_payload(self) -> Result<ResponsePayload, Error> {
        let body = self.into_checked_body().await?;
        parse_payload(&body)
    }

    async fn into_checked_body(self) -> Result<String, Error> {
        let status = self.status;
        if !self.is_success() {
            let body = self.inner.text().await.unwrap_or_else(|e| {
                tracing::debug!("Could not read error body for status {}: {}", status, e);
                String::new()
            });
            return Err(status_error(status, &body));
        }
        self.inner.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::transport(&e)
        })
    }
}

fn status_error(status: u16, body: &str) -> Error {
    let snippet = truncate_body(body);
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => tracing::error!("Request failed with status {}: {}", status, err.error),
        Err(_) => tracing::error!("Request failed with status {}: {}", status, snippet),
    }
    Error::HttpStatus {
        status,
        body: snippet,
    }
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(body)
        );
        Error::MalformedPayload(e.to_string())
    })
}

fn parse_payload(body: &str) -> Result<ResponsePayload, Error> {
    let value = parse_json::<serde_json::Value>(body)?;
    ResponsePayload::from_json(value).map_err(|e| {
        tracing::error!("Payload has unexpected shape: {}", e);
        Error::MalformedPayload(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
