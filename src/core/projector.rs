//! # State Projector
//!
//! Owns the two quote streams (listing and random pick) and refreshes them.
//!
//! ```text
//! refresh_*() → spawn:
//!   reachability (blocking pool)
//!     ├── false → publish Error("No Internet Connection"), no store call
//!     └── true  → store call → publish Success | Error
//! ```
//!
//! The caller never waits on the reachability check, so a slow probe does
//! not stall the UI loop.
//!
//! Each stream is a `tokio::sync::watch` cell: one writer, any number of
//! readers, readers always see the latest whole value.
//!
//! A manual refresh does not put the stream back into `Loading`; the old
//! value stays visible until the new result lands. Refreshes of the same
//! stream are not sequenced, so the last one to settle wins.

use std::fmt;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::reachability::Reachability;
use crate::core::state::QuoteState;
use crate::core::store::QuoteStore;

pub const NO_CONNECTION_MESSAGE: &str = "No Internet Connection";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feed {
    Listing,
    Random,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feed::Listing => write!(f, "listing"),
            Feed::Random => write!(f, "random"),
        }
    }
}

pub struct QuoteProjector {
    store: Arc<dyn QuoteStore>,
    reachability: Arc<dyn Reachability>,
    listing_tx: Arc<watch::Sender<QuoteState>>,
    random_tx: Arc<watch::Sender<QuoteState>>,
}

impl QuoteProjector {
    /// Both streams start at `Loading`. Nothing is fetched.
    pub fn new(store: Arc<dyn QuoteStore>, reachability: Arc<dyn Reachability>) -> Self {
        let (listing_tx, _) = watch::channel(QuoteState::Loading);
        let (random_tx, _) = watch::channel(QuoteState::Loading);
        Self {
            store,
            reachability,
            listing_tx: Arc::new(listing_tx),
            random_tx: Arc::new(random_tx),
        }
    }

    /// Builds the projector and kicks off one refresh of each stream.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(store: Arc<dyn QuoteStore>, reachability: Arc<dyn Reachability>) -> Self {
        let projector = Self::new(store, reachability);
        projector.refresh_listing();
        projector.refresh_random();
        projector
    }

    pub fn subscribe_listing(&self) -> watch::Receiver<QuoteState> {
        self.listing_tx.subscribe()
    }

    pub fn subscribe_random(&self) -> watch::Receiver<QuoteState> {
        self.random_tx.subscribe()
    }

    pub fn listing(&self) -> QuoteState {
        self.listing_tx.borrow().clone()
    }

    pub fn random(&self) -> QuoteState {
        self.random_tx.borrow().clone()
    }

    /// Refresh the listing stream.
    ///
    /// Returns the spawned task. It publishes exactly one value: the
    /// connectivity error, or the store's result. Needs a tokio runtime.
    pub fn refresh_listing(&self) -> JoinHandle<()> {
        self.refresh(Feed::Listing)
    }

    /// Refresh the random stream. Same contract as [`Self::refresh_listing`].
    pub fn refresh_random(&self) -> JoinHandle<()> {
        self.refresh(Feed::Random)
    }

    fn sender(&self, feed: Feed) -> Arc<watch::Sender<QuoteState>> {
        match feed {
            Feed::Listing => self.listing_tx.clone(),
            Feed::Random => self.random_tx.clone(),
        }
    }

    fn refresh(&self, feed: Feed) -> JoinHandle<()> {
        let tx = self.sender(feed);
        let store = self.store.clone();
        let reachability = self.reachability.clone();

        tokio::spawn(async move {
            if !check_reachability(reachability).await {
                warn!("Skipping {feed} refresh: no connectivity");
                tx.send_replace(QuoteState::Error(NO_CONNECTION_MESSAGE.to_string()));
                return;
            }

            info!("Refreshing {feed} quotes");
            let result = match feed {
                Feed::Listing => store.listing().await,
                Feed::Random => store.random_pick().await,
            };
            let next = match result {
                Ok(quotes) => {
                    info!("{feed} refresh returned {} quotes", quotes.len());
                    QuoteState::Success(quotes)
                }
                Err(e) => {
                    warn!("{feed} refresh failed: {e}");
                    QuoteState::Error(e.to_string())
                }
            };
            tx.send_replace(next);
        })
    }
}

/// Runs the check on the blocking pool. A panicking check counts as offline.
async fn check_reachability(reachability: Arc<dyn Reachability>) -> bool {
    match tokio::task::spawn_blocking(move || reachability.is_reachable()).await {
        Ok(reachable) => reachable,
        Err(e) => {
            warn!("Reachability check failed to run: {e}");
            false
        }
    }
}
