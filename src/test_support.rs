//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::api::{Quote, QuoteList, TransportError};
use crate::core::reachability::Reachability;
use crate::core::state::{App, QuoteState};
use crate::core::store::QuoteStore;

type Reply = Result<QuoteList, TransportError>;

/// A store that answers from canned replies and counts its calls.
pub struct FakeStore {
    listing: Mutex<Reply>,
    random: Mutex<Reply>,
    listing_calls: AtomicUsize,
    random_calls: AtomicUsize,
}

impl FakeStore {
    pub fn split(listing: Reply, random: Reply) -> Self {
        Self {
            listing: Mutex::new(listing),
            random: Mutex::new(random),
            listing_calls: AtomicUsize::new(0),
            random_calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(quotes: QuoteList) -> Self {
        Self::split(Ok(quotes.clone()), Ok(quotes))
    }

    pub fn err(error: TransportError) -> Self {
        Self::split(Err(error.clone()), Err(error))
    }

    pub fn set_random(&self, reply: Reply) {
        *self.random.lock().unwrap() = reply;
    }

    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.listing_calls() + self.random_calls()
    }
}

#[async_trait]
impl QuoteStore for FakeStore {
    async fn listing(&self) -> Result<QuoteList, TransportError> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        self.listing.lock().unwrap().clone()
    }

    async fn random_pick(&self) -> Result<QuoteList, TransportError> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        self.random.lock().unwrap().clone()
    }
}

pub struct FixedReachability(pub bool);

impl Reachability for FixedReachability {
    fn is_reachable(&self) -> bool {
        self.0
    }
}

/// Answers like `FixedReachability`, after sleeping the calling thread.
pub struct SlowReachability {
    reachable: bool,
    delay: Duration,
}

impl SlowReachability {
    pub fn new(reachable: bool, delay: Duration) -> Self {
        Self { reachable, delay }
    }
}

impl Reachability for SlowReachability {
    fn is_reachable(&self) -> bool {
        std::thread::sleep(self.delay);
        self.reachable
    }
}

/// Builds a quote list from `(content, author)` pairs.
pub fn quotes(pairs: &[(&str, &str)]) -> QuoteList {
    pairs
        .iter()
        .map(|(content, author)| Quote::new(*content, *author))
        .collect()
}

/// Creates a test App with both streams pinned to the given values.
/// The senders are returned so tests can publish further values.
pub fn test_app(
    listing: QuoteState,
    random: QuoteState,
) -> (App, watch::Sender<QuoteState>, watch::Sender<QuoteState>) {
    let (listing_tx, listing_rx) = watch::channel(listing);
    let (random_tx, random_rx) = watch::channel(random);
    (App::new(listing_rx, random_rx), listing_tx, random_tx)
}
