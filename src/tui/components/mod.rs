//! # TUI Components
//!
//! All UI components for the terminal interface. Every component is
//! stateless: it receives its data as props and renders it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top bar: app name and status)
//! ├── nav_bar.rs       (Bottom tab bar: Home, Quotes, About)
//! ├── home.rs          (Quote of the Day card)
//! ├── quote_pager.rs   (Listing, one quote per page)
//! ├── about.rs         (App info and key legend)
//! ├── quote_card.rs    (Card shared by home and pager)
//! └── status_view.rs   (Loading spinner and error panel)
//! ```
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App` themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! HomeScreen::new(&app.random.borrow(), spinner_frame).render(frame, area);
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod about;
pub mod home;
pub mod nav_bar;
pub mod quote_card;
pub mod quote_pager;
pub mod status_view;
mod title_bar;

pub use about::AboutScreen;
pub use home::HomeScreen;
pub use nav_bar::NavBar;
pub use quote_pager::QuotePager;
pub use title_bar::TitleBar;

/// Widest a quote card gets.
pub const CARD_MAX_WIDTH: u16 = 72;

/// A horizontally centered column of at most `max_width` cells.
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(area.width.min(max_width))])
        .flex(Flex::Center)
        .areas(area);
    column
}
