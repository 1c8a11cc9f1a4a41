//! HTTP client for the two read-only quote endpoints.
//!
//! No retries happen here. A failed call surfaces as a [`TransportError`]
//! and the caller decides what to do with it.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use super::types::{QuoteList, decode_quotes};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_LISTING_PATH: &str = "/quotes";
pub const DEFAULT_RANDOM_PATH: &str = "/quotes/random";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(40);

/// Errors surfaced by [`QuotesClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The underlying HTTP client could not be built.
    Client(String),
    /// Connection could not be established (DNS, refused, TLS).
    Connect(String),
    /// The call did not finish within the configured bound.
    Timeout,
    /// The server answered with a non-success status.
    Status { status: u16, body: String },
    /// The body did not match the expected schema.
    Decode(String),
    /// Any other request failure.
    Request(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Client(msg) => write!(f, "client error: {msg}"),
            TransportError::Connect(msg) => write!(f, "connection failed: {msg}"),
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Status { status, body } if body.is_empty() => {
                write!(f, "HTTP {status}")
            }
            TransportError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            TransportError::Decode(msg) => write!(f, "unexpected response body: {msg}"),
            TransportError::Request(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_decode() {
            TransportError::Decode(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Where the API lives and how long a call may take.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub base_url: String,
    pub listing_path: String,
    pub random_path: String,
    pub connect_timeout: Duration,
    /// Bound on the whole call, connect through body read.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            random_path: DEFAULT_RANDOM_PATH.to_string(),
            connect_timeout: DEFAULT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientOptions {
    /// Default paths and timeouts against a different host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

pub struct QuotesClient {
    options: ClientOptions,
    client: reqwest::Client,
}

impl QuotesClient {
    pub fn new(options: ClientOptions) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { options, client })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// GET the full listing.
    pub async fn fetch_listing(&self) -> Result<QuoteList, TransportError> {
        self.get_quotes(&self.options.url(&self.options.listing_path))
            .await
    }

    /// GET the random pick. Same decoding as the listing.
    pub async fn fetch_random(&self) -> Result<QuoteList, TransportError> {
        self.get_quotes(&self.options.url(&self.options.random_path))
            .await
    }

    async fn get_quotes(&self, url: &str) -> Result<QuoteList, TransportError> {
        info!("GET {url}");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("GET {url} failed: {e}");
            TransportError::from(e)
        })?;

        let status = response.status();
        debug!("GET {url} -> {status}");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Quotes API error: {} - {}", status.as_u16(), body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!("Response body ({} bytes): {}", body.len(), body);

        let quotes = decode_quotes(&body).map_err(|e| {
            warn!("Failed to decode quotes from {url}: {e}");
            TransportError::Decode(e.to_string())
        })?;
        info!("Decoded {} quotes from {url}", quotes.len());
        Ok(quotes)
    }
}
