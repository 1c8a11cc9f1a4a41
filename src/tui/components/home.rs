//! # Home Screen
//!
//! "Quote of the Day": the first quote of the random stream on a card,
//! with a hint for fetching another one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::QuoteState;
use crate::tui::component::Component;
use crate::tui::components::quote_card::QuoteCard;
use crate::tui::components::{CARD_MAX_WIDTH, centered_column};
use crate::tui::components::status_view::{ErrorView, LoadingView};

pub struct HomeScreen<'a> {
    pub state: &'a QuoteState,
    pub spinner_frame: usize,
}

impl<'a> HomeScreen<'a> {
    pub fn new(state: &'a QuoteState, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
        }
    }
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [_, heading_area, body_area, hint_area] =
            Layout::vertical([Length(1), Length(2), Min(0), Length(2)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Quote of the Day",
                Style::default().add_modifier(Modifier::ITALIC | Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            heading_area,
        );

        // Keep the card from stretching across wide terminals
        let card_area = centered_column(body_area, CARD_MAX_WIDTH);

        match self.state {
            QuoteState::Loading => LoadingView::new(self.spinner_frame).render(frame, card_area),
            QuoteState::Error(message) => ErrorView::new(message).render(frame, card_area),
            QuoteState::Success(quotes) => match quotes.first() {
                Some(quote) => QuoteCard::new(quote).render(frame, card_area),
                None => frame.render_widget(
                    Paragraph::new("No quote available").alignment(Alignment::Center),
                    card_area,
                ),
            },
        }

        let hint = Line::from(vec![
            Span::styled("[r]", Style::default().fg(Color::Yellow)),
            Span::raw(" another quote  "),
            Span::styled("[s]", Style::default().fg(Color::Yellow)),
            Span::raw(" share"),
        ]);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::quotes;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(state: &QuoteState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| HomeScreen::new(state, 0).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_home_loading() {
        let text = rendered(&QuoteState::Loading);
        assert!(text.contains("Quote of the Day"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_home_success_shows_first_quote() {
        let text = rendered(&QuoteState::Success(quotes(&[("First", "One"), ("Second", "Two")])));
        assert!(text.contains("First"));
        assert!(text.contains("- One"));
        assert!(!text.contains("Second"));
    }

    #[test]
    fn test_home_empty_success() {
        let text = rendered(&QuoteState::Success(Vec::new()));
        assert!(text.contains("No quote available"));
    }

    #[test]
    fn test_home_error() {
        let text = rendered(&QuoteState::Error("request timed out".to_string()));
        assert!(text.contains("request timed out"));
    }
}
