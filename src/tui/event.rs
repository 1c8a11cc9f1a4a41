use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::state::Tab;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    NextTab,
    PrevTab,
    SelectTab(usize),
    Left,
    Right,
    Refresh,
    Share,
    Resize,
}

impl TuiEvent {
    /// Core action this event maps to, if any.
    pub fn to_action(&self) -> Option<Action> {
        match self {
            TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
            TuiEvent::NextTab => Some(Action::NextTab),
            TuiEvent::PrevTab => Some(Action::PrevTab),
            TuiEvent::SelectTab(index) => Tab::from_index(*index).map(Action::SelectTab),
            TuiEvent::Left => Some(Action::PrevPage),
            TuiEvent::Right => Some(Action::NextPage),
            TuiEvent::Refresh => Some(Action::RefreshRandom),
            TuiEvent::Share => Some(Action::Share),
            TuiEvent::Resize => None,
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {e}");
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) => map_key(key_event),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {e}");
            None
        }
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports both press and release
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Tab) => Some(TuiEvent::NextTab),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevTab),
        (_, KeyCode::Char(c @ '1'..='3')) => Some(TuiEvent::SelectTab(c as usize - '1' as usize)),
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::Left),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::Right),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Share),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key_bindings() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(map_key(key(KeyCode::Tab)), Some(TuiEvent::NextTab));
        assert_eq!(map_key(key(KeyCode::Char('2'))), Some(TuiEvent::SelectTab(1)));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(TuiEvent::Right));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(TuiEvent::Refresh));
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_to_action() {
        assert_eq!(TuiEvent::SelectTab(2).to_action(), Some(Action::SelectTab(Tab::About)));
        assert_eq!(TuiEvent::SelectTab(7).to_action(), None);
        assert_eq!(TuiEvent::Refresh.to_action(), Some(Action::RefreshRandom));
        assert_eq!(TuiEvent::Resize.to_action(), None);
    }
}
