//! # NavBar Component
//!
//! Bottom navigation between the three screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::core::state::Tab;
use crate::tui::component::Component;

pub struct NavBar {
    pub selected: Tab,
}

impl NavBar {
    pub fn new(selected: Tab) -> Self {
        Self { selected }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.label())));

        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .block(Block::bordered().border_style(Style::default().add_modifier(Modifier::DIM)));

        frame.render_widget(tabs, area);
    }
}
