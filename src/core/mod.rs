//! # Core Application Logic
//!
//! Fetching, state projection and UI state for the quotes app.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!     ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//!     │ QuotesClient│ ──▶ │ QuoteStore  │ ──▶ │ QuoteProjector   │
//!     │  (api)      │     │             │     │ listing / random │
//!     └─────────────┘     └─────────────┘     └────────┬─────────┘
//!                                                      │ watch
//!                                  Reachability ──▶    ▼
//!                                               ┌────────────┐
//!                                               │  App + TUI │
//!                                               └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `QuoteState` tri-state and the `App` struct
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`projector`]: Owns the two quote streams and refreshes them
//! - [`store`]: `QuoteStore` seam over the HTTP client
//! - [`reachability`]: Network availability check
//! - [`share`]: Hands quote text to the system clipboard
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod projector;
pub mod reachability;
pub mod share;
pub mod state;
pub mod store;
