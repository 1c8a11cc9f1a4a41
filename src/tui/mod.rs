//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading** (either stream waiting on its first result): draws every
//!   ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize, or a new
//!   value on one of the quote streams.

mod component;
pub mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::api::{QuotesClient, TransportError};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::projector::QuoteProjector;
use crate::core::reachability::{AlwaysReachable, Reachability, TcpProbe};
use crate::core::share::ShareCommand;
use crate::core::state::App;
use crate::core::store::RemoteQuoteStore;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct CursorGuard;

impl CursorGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Pick the reachability check a resolved config asks for.
pub fn build_reachability(config: &ResolvedConfig) -> Arc<dyn Reachability> {
    if !config.reachability_check {
        info!("Reachability check disabled");
        return Arc::new(AlwaysReachable);
    }
    match TcpProbe::for_url(&config.client.base_url, config.probe_timeout) {
        Some(probe) => Arc::new(probe),
        None => {
            warn!(
                "Cannot derive a probe target from {}, skipping reachability check",
                config.client.base_url
            );
            Arc::new(AlwaysReachable)
        }
    }
}

/// Wire client, store and reachability into a started projector.
///
/// Must be called from within a tokio runtime.
pub fn build_projector(config: &ResolvedConfig) -> Result<QuoteProjector, TransportError> {
    let client = QuotesClient::new(config.client.clone())?;
    let store = Arc::new(RemoteQuoteStore::new(client));
    Ok(QuoteProjector::start(store, build_reachability(config)))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let projector = build_projector(&config).map_err(std::io::Error::other)?;
    let mut app = App::new(projector.subscribe_listing(), projector.subscribe_random());

    let mut terminal = ratatui::init();
    let _cursor_guard = CursorGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if app.sync_streams() {
            needs_redraw = true;
        }

        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        let events = first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate));
        let actions = events
            .filter(|event| !matches!(event, TuiEvent::Resize))
            .filter_map(|event| event.to_action())
            .chain(std::iter::from_fn(|| rx.try_recv().ok()))
            .collect::<Vec<_>>();

        for action in actions {
            needs_redraw = true;
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::RefreshRandom => {
                    projector.refresh_random();
                }
                Effect::Share { text, author } => {
                    spawn_share(config.share.clone(), text, author, tx.clone());
                }
                Effect::None => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_share(command: ShareCommand, text: String, author: String, tx: mpsc::Sender<Action>) {
    info!("Sharing quote by {author}");
    tokio::task::spawn_blocking(move || {
        let result = command.share(&text).map(|()| author).map_err(|e| {
            warn!("Share via {} failed: {}", command.program, e);
            e.to_string()
        });
        if tx.send(Action::ShareFinished(result)).is_err() {
            warn!("Failed to report share result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientOptions;

    fn config(reachability_check: bool, base_url: &str) -> ResolvedConfig {
        ResolvedConfig {
            client: ClientOptions::with_base_url(base_url),
            reachability_check,
            probe_timeout: Duration::from_millis(100),
            share: ShareCommand::platform_default(),
        }
    }

    #[test]
    fn test_build_reachability_disabled_is_always_reachable() {
        let reachability = build_reachability(&config(false, "http://127.0.0.1:1"));
        assert!(reachability.is_reachable());
    }

    #[test]
    fn test_build_reachability_falls_back_on_unusable_url() {
        let reachability = build_reachability(&config(true, "not a url"));
        assert!(reachability.is_reachable());
    }
}
