//! EZUnsub API client.

use reqwest::{Client, Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    resources::{Contacts, Exports, Links, Offers, Webhooks},
};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("ezunsub-rust/", env!("CARGO_PKG_VERSION"));

/// Async client for the EZUnsub API.
#[derive(Debug, Clone)]
pub struct EzUnsubClient {
    client: Client,
    config: ClientConfig,
}

impl EzUnsubClient {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// Set a custom base URL (for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(url);
        self
    }

    /// Contacts resource.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Webhook subscriptions resource.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// Unsubscribe links resource.
    #[must_use]
    pub const fn links(&self) -> Links<'_> {
        Links::new(self)
    }

    /// Offers resource.
    #[must_use]
    pub const fn offers(&self) -> Offers<'_> {
        Offers::new(self)
    }

    /// Exports resource.
    #[must_use]
    pub const fn exports(&self) -> Exports<'_> {
        Exports::new(self)
    }

    /// Make an API request.
    ///
    /// One attempt per call; rate limits and transient failures are
    /// reported to the caller, not retried.
    ///
    /// # Errors
    /// Transport failures map to [`Error::Http`]; non-success statuses map
    /// to the error kind for that status.
    #[instrument(skip(self, json, query), fields(method = %method))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        json: Option<&Value>,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value> {
        let url = format!("{}{path}", self.config.base_url);
        debug!("sending EZUnsub API request");

        let mut builder = self
            .client
            .request(method, &url)
            .header("x-api-key", &self.config.api_key)
            .header("accept", "application/json")
            .header("user-agent", USER_AGENT);

        if let Some(body) = json {
            builder = builder.json(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }

        let response = builder.send().await?;
        handle_response(response).await
    }
}

/// Map a response to parsed JSON or the error kind for its status.
async fn handle_response(response: Response) -> Result<Value> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(&bytes).map_err(Error::from);
    }

    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());

    let bytes = response.bytes().await?;
    let message = serde_json::from_slice::<Value>(&bytes)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| "Request failed".to_string());

    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Authentication(message),
        StatusCode::FORBIDDEN => Error::Forbidden(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited {
            message,
            retry_after,
        },
        StatusCode::BAD_REQUEST => Error::Validation(message),
        _ => Error::Api {
            status: status.as_u16(),
            message,
        },
    })
}
