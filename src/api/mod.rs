//! # Quotes API
//!
//! Transport layer for the remote quotes service: the wire record
//! ([`Quote`]) and the two-endpoint HTTP client ([`QuotesClient`]).

pub mod client;
pub mod types;

pub use client::{ClientOptions, QuotesClient, TransportError};
pub use types::{Quote, QuoteList};
