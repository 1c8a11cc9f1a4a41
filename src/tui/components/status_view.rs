//! # Loading and Error Views
//!
//! What a screen shows while its stream is `Loading` or after it settled on
//! `Error`. Both are centered in the area they are given.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stand-in for a no-signal icon.
const NO_SIGNAL_GLYPH: &[&str] = &["  ▂▄▆█  ", "   ╳    "];

pub struct LoadingView {
    pub spinner_frame: usize,
}

impl LoadingView {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let line = Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(Color::Cyan)),
            Span::raw(" Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }
}

pub struct ErrorView<'a> {
    pub message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Component for ErrorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = NO_SIGNAL_GLYPH
            .iter()
            .map(|row| Line::styled(*row, Style::default().fg(Color::Red)))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            self.message,
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let height = (paragraph.line_count(area.width) as u16).min(area.height);

        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(paragraph, body);
    }
}
