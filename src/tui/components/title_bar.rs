//! # TitleBar Component
//!
//! Top bar showing the app name and the current status message.
//!
//! The text changes based on state:
//!
//! 1. **Status message**: `"Quotes | Fetching another quote..."`
//! 2. **Default**: `"Quotes"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "Quotes";

/// Top status bar component. Purely presentational.
pub struct TitleBar {
    /// Status message (e.g., "Copied quote by Seneca")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn title_line(&self) -> Line<'static> {
        let name = Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD));
        if self.status_message.is_empty() {
            Line::from(name)
        } else {
            Line::from(vec![name, Span::raw(format!(" | {}", self.status_message))])
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.title_line(), area);
    }
}
