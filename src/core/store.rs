//! # Quote Store
//!
//! Two independently awaitable reads over the transport client. No caching:
//! every call goes to the network, and transport errors pass through as-is.

use async_trait::async_trait;

use crate::api::{QuoteList, QuotesClient, TransportError};

#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// The full listing. One result per call.
    async fn listing(&self) -> Result<QuoteList, TransportError>;

    /// The random pick. One result per call.
    async fn random_pick(&self) -> Result<QuoteList, TransportError>;
}

/// Store backed by the remote API.
pub struct RemoteQuoteStore {
    client: QuotesClient,
}

impl RemoteQuoteStore {
    pub fn new(client: QuotesClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuoteStore for RemoteQuoteStore {
    async fn listing(&self) -> Result<QuoteList, TransportError> {
        self.client.fetch_listing().await
    }

    async fn random_pick(&self) -> Result<QuoteList, TransportError> {
        self.client.fetch_random().await
    }
}
