//! # Actions
//!
//! Everything the user can do becomes an `Action`. `update()` applies it to
//! the `App` and returns an `Effect` for the event loop to carry out. No I/O
//! happens here: fetching and sharing are effects.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{App, FETCHING_MESSAGE, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SelectTab(Tab),
    NextPage,
    PrevPage,
    /// "Get another quote" on the home card.
    RefreshRandom,
    /// Share the quote currently on screen.
    Share,
    /// Result of a share effect: the author on success, the error otherwise.
    ShareFinished(Result<String, String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    RefreshRandom,
    /// Hand this text to the share command.
    Share { text: String, author: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::NextTab => {
            app.tab = app.tab.next();
            Effect::None
        }
        Action::PrevTab => {
            app.tab = app.tab.prev();
            Effect::None
        }
        Action::SelectTab(tab) => {
            app.tab = tab;
            Effect::None
        }
        Action::NextPage => {
            if app.tab == Tab::Quotes {
                let last = app.listing_len().saturating_sub(1);
                app.page = (app.page + 1).min(last);
            }
            Effect::None
        }
        Action::PrevPage => {
            if app.tab == Tab::Quotes {
                app.page = app.page.saturating_sub(1);
            }
            Effect::None
        }
        Action::RefreshRandom => {
            if app.tab != Tab::Home {
                return Effect::None;
            }
            app.status_message = FETCHING_MESSAGE.to_string();
            Effect::RefreshRandom
        }
        Action::Share => {
            let quote = match app.tab {
                Tab::Home => app.current_random_quote(),
                Tab::Quotes => app.current_listing_quote(),
                Tab::About => return Effect::None,
            };
            match quote {
                Some(quote) => {
                    app.status_message = String::from("Sharing...");
                    Effect::Share {
                        text: quote.share_text(),
                        author: quote.author,
                    }
                }
                None => {
                    app.status_message = String::from("Nothing to share");
                    Effect::None
                }
            }
        }
        Action::ShareFinished(Ok(author)) => {
            app.status_message = format!("Copied quote by {author}");
            Effect::None
        }
        Action::ShareFinished(Err(e)) => {
            app.status_message = format!("Share failed: {e}");
            Effect::None
        }
    }
}
