//! # QuoteCard Component
//!
//! A bordered card with the quote text and `- author` underneath.
//! Used by the home screen (random pick) and the pager (listing).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::api::Quote;
use crate::tui::component::Component;

pub struct QuoteCard<'a> {
    pub quote: &'a Quote,
    /// Shout the quote text (pager style).
    pub uppercase: bool,
    /// Optional text in the bottom border, e.g. a page indicator.
    pub footer: Option<String>,
    pub accent: Color,
}

impl<'a> QuoteCard<'a> {
    pub fn new(quote: &'a Quote) -> Self {
        Self {
            quote,
            uppercase: false,
            footer: None,
            accent: Color::Magenta,
        }
    }

    /// Lines of the card body wrapped to `width` columns.
    fn body_lines(&self, width: u16) -> Vec<Line<'static>> {
        let content = if self.uppercase {
            self.quote.content.trim().to_uppercase()
        } else {
            self.quote.content.trim().to_string()
        };
        let width = usize::from(width.max(1));

        let mut lines: Vec<Line<'static>> = textwrap::wrap(&content, width)
            .into_iter()
            .map(|row| {
                Line::styled(
                    row.into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(
            Line::styled(
                format!("- {}", self.quote.author.trim()),
                Style::default().add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Right),
        );
        lines
    }

    /// Height the card needs at the given outer width, borders included.
    pub fn required_height(&self, width: u16) -> u16 {
        // Borders (2) + horizontal padding (2 each side)
        let inner = width.saturating_sub(6);
        self.body_lines(inner).len() as u16 + 2
    }
}

impl Component for QuoteCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let height = self.required_height(area.width).min(area.height);
        let [card_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.accent))
            .padding(Padding::horizontal(2));
        if let Some(ref footer) = self.footer {
            block = block.title_bottom(Line::from(footer.clone()).centered());
        }

        let lines = self.body_lines(card_area.width.saturating_sub(6));
        frame.render_widget(Paragraph::new(lines).block(block), card_area);
    }
}
