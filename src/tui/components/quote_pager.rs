//! # Quote Pager
//!
//! The listing stream, one quote per page. The page index lives in `App`;
//! this component only clamps it for display.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::QuoteState;
use crate::tui::component::Component;
use crate::tui::components::quote_card::QuoteCard;
use crate::tui::components::{CARD_MAX_WIDTH, centered_column};
use crate::tui::components::status_view::{ErrorView, LoadingView};

pub struct QuotePager<'a> {
    pub state: &'a QuoteState,
    pub page: usize,
    pub spinner_frame: usize,
}

impl<'a> QuotePager<'a> {
    pub fn new(state: &'a QuoteState, page: usize, spinner_frame: usize) -> Self {
        Self {
            state,
            page,
            spinner_frame,
        }
    }
}

impl Component for QuotePager<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [body_area, hint_area] = Layout::vertical([Min(0), Length(2)]).areas(area);
        let card_area = centered_column(body_area, CARD_MAX_WIDTH);

        let quotes = match self.state {
            QuoteState::Loading => {
                LoadingView::new(self.spinner_frame).render(frame, body_area);
                return;
            }
            QuoteState::Error(message) => {
                ErrorView::new(message).render(frame, body_area);
                return;
            }
            QuoteState::Success(quotes) => quotes,
        };

        let Some(last) = quotes.len().checked_sub(1) else {
            frame.render_widget(
                Paragraph::new("No quotes to show").alignment(Alignment::Center),
                body_area,
            );
            return;
        };

        let page = self.page.min(last);
        let mut card = QuoteCard::new(&quotes[page]);
        card.uppercase = true;
        card.accent = Color::Cyan;
        card.footer = Some(format!(" {} / {} ", page + 1, quotes.len()));
        card.render(frame, card_area);

        let key = Style::default().fg(Color::Yellow);
        let hint = Line::from(vec![
            Span::styled("[←/→]", key),
            Span::raw(" browse  "),
            Span::styled("[s]", key),
            Span::raw(" share"),
        ]);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
    }
}
