/*
[INPUT]:  HTTP configuration (base URL, owner identifier, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, TodoError};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Collection root of the hosted demo to-do service
pub const DEFAULT_BASE_URL: &str = "https://playground.4geeks.com/todo/todos";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for one owner's remote task collection.
///
/// The owner identifier is injected at construction and scopes every
/// request; it is never read from process-wide state.
#[derive(Debug, Clone)]
pub struct TodoClient {
    http_client: Client,
    base_url: Url,
    owner: String,
}

impl TodoClient {
    /// Create a new client for `owner` with default configuration
    pub fn new(owner: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), owner)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, owner: impl Into<String>) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL, owner)
    }

    /// Create a new client against an explicit base URL.
    ///
    /// Integration tests point this at a local mock server.
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        owner: impl Into<String>,
    ) -> Result<Self> {
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(TodoError::Config("owner identifier is empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            owner,
        })
    }

    /// Owner identifier this client is scoped to
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Build the collection URL: `<base>/<owner>`
    fn collection_url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TodoError::Config("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&self.owner);
        Ok(url)
    }

    /// Build an item URL: `<base>/<owner>/<id>`
    fn item_url(&self, id: i64) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| TodoError::Config("base URL cannot be a base".to_string()))?
            .push(&id.to_string());
        Ok(url)
    }

    /// Build request builder for collection-level endpoints
    pub(crate) fn collection_request(&self, method: Method) -> Result<RequestBuilder> {
        let url = self.collection_url()?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder for item-level endpoints
    pub(crate) fn item_request(&self, method: Method, id: i64) -> Result<RequestBuilder> {
        let url = self.item_url(id)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON body of a success response.
    ///
    /// Non-success statuses are mapped to [`TodoError::Api`] carrying the
    /// status code and the response body text.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TodoError::api_error(status, message));
        }

        debug!(status = status.as_u16(), "request succeeded");
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request where success carries no meaningful body (200/204).
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TodoError::api_error(status, message));
        }

        debug!(status = status.as_u16(), "request succeeded");
        Ok(())
    }
}
