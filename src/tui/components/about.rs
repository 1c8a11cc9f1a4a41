//! # About Screen

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const SOURCE_URL: &str = "https://github.com/Chotai-Dhruvi/";

const KEYS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "switch screen"),
    ("1 2 3", "jump to screen"),
    ("r", "another quote (Home)"),
    ("← →", "browse (Quotes)"),
    ("s", "share quote"),
    ("q / Esc", "quit"),
];

pub struct AboutScreen;

impl AboutScreen {
    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                "Welcome to Quote App!",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "by Dhruvi Chotai",
                Style::default().add_modifier(Modifier::ITALIC),
            ),
            Line::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::raw("Source code: "),
                Span::styled(
                    SOURCE_URL,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::raw(""),
        ];
        lines.extend(KEYS.iter().map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>16}"), Style::default().fg(Color::Yellow)),
                Span::raw(format!("  {what:<22}")),
            ])
        }));
        lines
    }
}

impl Component for AboutScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = Self::lines();
        let height = (lines.len() as u16).min(area.height);
        let [body] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
    }
}
