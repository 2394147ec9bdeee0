//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event -> TuiEvent -> screen state .handle() -> Action
//!                                                          |
//!                 background task <- Effect <- core::update()
//!                        |
//!                        +-> Action over mpsc -> core::update()
//! ```
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (splash, any spinner): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background results
//!   or terminal resize.

mod component;
mod components;
mod event;
mod screens;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::session;
use crate::core::state::App;
use crate::services::Services;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{
    DetailState, HomeState, LoginState, SearchState, StatsState, UpdateFormState,
};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent per-screen states
    pub login: LoginState,
    pub home: HomeState,
    pub search: SearchState,
    pub detail: DetailState,
    pub update: UpdateFormState,
    pub stats: StatsState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            login: LoginState::new(),
            home: HomeState::new(),
            search: SearchState::new(),
            detail: DetailState::new(),
            update: UpdateFormState::new(),
            stats: StatsState::new(),
        }
    }

    /// Hand a terminal event to whichever screen is showing.
    pub fn handle(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        match app.route() {
            // Any confirming key skips the splash timer
            Route::Splash => matches!(
                event,
                TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' ')
            )
            .then_some(Action::SplashFinished),
            Route::Login | Route::CreateAccount => self.login.handle(app, event),
            Route::Home => self.home.handle(app, event),
            Route::Search => self.search.handle(app, event),
            Route::Detail(_) => self.detail.handle(app, event),
            Route::Update(_) => self.update.handle(app, event),
            Route::Stats => self.stats.handle(app, event),
        }
    }

    /// Called after the current route changed.
    fn on_route_changed(&mut self, app: &App) {
        // Show the query the search screen ran on entry
        if *app.route() == Route::Search && self.search.query.text().is_empty() {
            self.search.query.set_text(&app.search.query);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for text fields
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let services = Services::from_config(&config).map_err(std::io::Error::other)?;
    let user = session::load_session(services.session_path());
    if let Some(user) = &user {
        info!("Restored session for {}", user.id);
    }
    let mut app = App::new(Arc::new(services), config.default_query.clone(), user);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let splash_deadline = start_time + config.splash;
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        if *app.route() == Route::Splash && Instant::now() >= splash_deadline {
            should_quit |= dispatch(&mut app, &mut tui, Action::SplashFinished, &tx);
            needs_redraw = true;
        }

        let animating = ui::is_busy(&app);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of screen
            let action = if matches!(event, TuiEvent::ForceQuit) {
                Some(Action::Quit)
            } else {
                tui.handle(&app, &event)
            };
            if let Some(action) = action {
                should_quit |= dispatch(&mut app, &mut tui, action, &tx);
            }
            if should_quit {
                break;
            }
        }

        // Results from background effects
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= dispatch(&mut app, &mut tui, action, &tx);
        }
    }

    info!("Shelf shutting down");
    ratatui::restore();
    Ok(())
}

/// Apply one action and start the effect it returns. `true` means quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let signing_out = matches!(action, Action::SignOut);
    let before = app.route().clone();

    let effect = update(app, action);

    // Nothing typed or selected survives into the next user's session
    if signing_out {
        *tui = TuiState::new();
    }
    if *app.route() != before {
        tui.on_route_changed(app);
    }

    match effect {
        Effect::Quit => true,
        Effect::None => false,
        effect => {
            spawn_effect(app.services.clone(), effect, tx.clone());
            false
        }
    }
}

fn spawn_effect(services: Arc<Services>, effect: Effect, tx: mpsc::Sender<Action>) {
    debug!("Spawning effect: {:?}", effect);
    tokio::spawn(async move {
        if let Some(action) = services.perform(effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver effect result: receiver dropped");
        }
    });
}
