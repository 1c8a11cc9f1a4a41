//! # Application State
//!
//! The tri-state value each quote stream carries, and the `App` struct the
//! UI renders from.
//!
//! ```text
//! App
//! ├── listing: watch::Receiver<QuoteState>   // full listing stream
//! ├── random: watch::Receiver<QuoteState>    // random pick stream
//! ├── tab: Tab                               // Home | Quotes | About
//! ├── page: usize                            // pager index on Quotes
//! └── status_message: String                 // title bar text
//! ```
//!
//! The streams are read-only here. Only the projector writes to them.

use tokio::sync::watch;

use crate::api::{Quote, QuoteList};

/// Title bar text while a manual random refresh is in flight.
pub const FETCHING_MESSAGE: &str = "Fetching another quote...";

/// The value of one quote stream at any instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuoteState<T = QuoteList> {
    #[default]
    Loading,
    Success(T),
    Error(String),
}

impl<T> QuoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QuoteState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            QuoteState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QuoteState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Bottom navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Quotes,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Quotes, Tab::About];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Quotes => "Quotes",
            Tab::About => "About",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Quotes => 1,
            Tab::About => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

pub struct App {
    pub listing: watch::Receiver<QuoteState>,
    pub random: watch::Receiver<QuoteState>,
    pub tab: Tab,
    pub page: usize,
    pub status_message: String,
}

impl App {
    pub fn new(listing: watch::Receiver<QuoteState>, random: watch::Receiver<QuoteState>) -> Self {
        Self {
            listing,
            random,
            tab: Tab::default(),
            page: 0,
            status_message: String::new(),
        }
    }

    /// True while either stream is still waiting on its first result.
    pub fn is_loading(&self) -> bool {
        self.listing.borrow().is_loading() || self.random.borrow().is_loading()
    }

    pub fn listing_len(&self) -> usize {
        self.listing.borrow().success().map_or(0, Vec::len)
    }

    /// The quote on the current pager page, clamped to the listing.
    pub fn current_listing_quote(&self) -> Option<Quote> {
        let state = self.listing.borrow();
        let quotes = state.success()?;
        let last = quotes.len().checked_sub(1)?;
        quotes.get(self.page.min(last)).cloned()
    }

    /// The quote shown on the home card.
    pub fn current_random_quote(&self) -> Option<Quote> {
        self.random.borrow().success()?.first().cloned()
    }

    /// Marks both streams as seen. Returns true if either changed.
    ///
    /// A new random value settles any pending "fetching" status.
    pub fn sync_streams(&mut self) -> bool {
        let listing_changed = self.listing.has_changed().unwrap_or(false);
        let random_changed = self.random.has_changed().unwrap_or(false);
        if listing_changed {
            self.listing.borrow_and_update();
            self.page = self.page.min(self.listing_len().saturating_sub(1));
        }
        if random_changed {
            self.random.borrow_and_update();
            if self.status_message == FETCHING_MESSAGE {
                self.status_message.clear();
            }
        }
        listing_changed || random_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::quotes;

    #[test]
    fn test_quote_state_defaults_to_loading() {
        let state: QuoteState = QuoteState::default();
        assert!(state.is_loading());
        assert!(state.success().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_tab_cycles_both_ways() {
        assert_eq!(Tab::Home.next(), Tab::Quotes);
        assert_eq!(Tab::About.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::About);
        assert_eq!(Tab::from_index(2), Some(Tab::About));
        assert_eq!(Tab::from_index(3), None);
    }

    #[test]
    fn test_current_listing_quote_clamps_page() {
        let (_ltx, listing) = watch::channel(QuoteState::Success(quotes(&[("A", "a"), ("B", "b")])));
        let (_rtx, random) = watch::channel(QuoteState::Loading);
        let mut app = App::new(listing, random);
        app.page = 9;
        assert_eq!(app.current_listing_quote(), Some(Quote::new("B", "b")));
        assert!(app.current_random_quote().is_none());
        assert!(app.is_loading());
    }

    #[test]
    fn test_sync_streams_reports_changes_and_clamps() {
        let (ltx, listing) = watch::channel(QuoteState::Success(quotes(&[("A", "a"), ("B", "b")])));
        let (_rtx, random) = watch::channel(QuoteState::Loading);
        let mut app = App::new(listing, random);
        app.page = 1;
        assert!(!app.sync_streams());

        ltx.send_replace(QuoteState::Success(quotes(&[("C", "c")])));
        assert!(app.sync_streams());
        assert_eq!(app.page, 0);
        assert!(!app.sync_streams());
    }

    #[test]
    fn test_settled_random_clears_fetching_status() {
        let (_ltx, listing) = watch::channel(QuoteState::Loading);
        let (rtx, random) = watch::channel(QuoteState::Success(quotes(&[("A", "a")])));
        let mut app = App::new(listing, random);
        app.status_message = FETCHING_MESSAGE.to_string();

        assert!(!app.sync_streams());
        assert_eq!(app.status_message, FETCHING_MESSAGE);

        rtx.send_replace(QuoteState::Success(quotes(&[("B", "b")])));
        assert!(app.sync_streams());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_settled_random_keeps_share_status() {
        let (_ltx, listing) = watch::channel(QuoteState::Loading);
        let (rtx, random) = watch::channel(QuoteState::Loading);
        let mut app = App::new(listing, random);
        app.status_message = "Copied quote by a".to_string();

        rtx.send_replace(QuoteState::Error("request timed out".into()));
        assert!(app.sync_streams());
        assert_eq!(app.status_message, "Copied quote by a");
    }
}
