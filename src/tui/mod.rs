//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request lifecycle
//!
//! `update()` answers an accepted submit with `Effect::SpawnRequest`. The
//! request runs as a tokio task and sends its single `Action::Settled` back
//! over a channel, which the loop drains between input polls.
//!
//! ## Redraw Strategy
//!
//! - **Submitting**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::backend::{AskBackend, HttpBackend, settle};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, QuestionInput, ResponsePanel};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input: QuestionInput,
    pub response_panel: ResponsePanel,
    /// Shown in the title bar
    pub endpoint: String,
}

impl TuiState {
    pub fn new(endpoint: String, placeholder: &str) -> Self {
        Self {
            input: QuestionInput::new(placeholder),
            response_panel: ResponsePanel::new(),
            endpoint,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Routes one terminal event. Returns the effect the loop must carry out.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.response_panel.handle_event(event);
            Effect::None
        }
        _ => {
            tui.input.disabled = app.is_loading();
            match tui.input.handle_event(event) {
                Some(InputEvent::Changed(text)) => update(app, Action::QuestionChanged(text)),
                Some(InputEvent::Submit) => update(app, Action::Submit),
                None => Effect::None,
            }
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn AskBackend> = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new(backend.endpoint(), &config.placeholder);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Settlements from the request task
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, &event) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(question) => {
                    spawn_request(backend.clone(), question, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_request(backend: Arc<dyn AskBackend>, question: String, tx: mpsc::Sender<Action>) {
    info!("Spawning ask request to {}", backend.endpoint());
    tokio::spawn(async move {
        let action = settle(backend.as_ref(), &question).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver settlement: receiver dropped");
        }
    });
}
