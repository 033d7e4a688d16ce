//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop runs on the main thread and owns `App`. Acquisition attempts run
//! as tokio tasks and report back through an `mpsc` channel of `Action`s,
//! the same channel the permission prompt uses to open its dialog:
//!
//! ```text
//! keys ──▶ TuiEvent ──▶ update() ──Effect::SpawnAcquisition──▶ tokio task
//!                          ▲                                      │
//!                          └──── Action::AcquisitionFinished ─────┘
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle** (error or map on screen): sleeps up to 500ms and only
//!   redraws on events, resizes, or background actions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::presenter::present;
use crate::core::state::{App, AttemptId};
use crate::location::{
    CachedPositionProvider, IpApiSource, LocationAcquirer, PermissionProvider, PermissionStatus,
    Position, PositionOptions, PositionSource, PromptPermission, SimulatedSource,
    StaticPermission,
};
use crate::tui::components::PermissionDialog;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::{PermissionMode, SourceKind};

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    /// Shown in the title bar.
    pub source_name: String,
    // Animation state
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(source_name: String) -> Self {
        Self {
            source_name,
            spinner_frame: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Build the raw fix source named by the config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn PositionSource> {
    match config.source {
        SourceKind::Simulated => match &config.simulated_fault {
            Some(message) => Arc::new(SimulatedSource::failing(message.clone())),
            None => Arc::new(SimulatedSource::new(config.simulated_coords)),
        },
        SourceKind::Ip => Arc::new(IpApiSource::new(Some(config.ip_base_url.clone()))),
    }
}

/// Build the permission provider. `Prompt` routes requests through `tx` to
/// this event loop, which shows the dialog.
pub fn build_permission(
    config: &ResolvedConfig,
    tx: mpsc::Sender<Action>,
) -> Arc<dyn PermissionProvider> {
    match config.permission {
        PermissionMode::Prompt => Arc::new(PromptPermission::new(tx, Action::PermissionRequested)),
        PermissionMode::Granted => Arc::new(StaticPermission::new(PermissionStatus::Granted)),
        PermissionMode::Denied => Arc::new(StaticPermission::new(PermissionStatus::Denied)),
    }
}

/// Wrap the configured source in the last-known cache. Only the simulated
/// source may start with a cached fix.
pub fn build_position_provider(config: &ResolvedConfig) -> CachedPositionProvider {
    let mut position = CachedPositionProvider::new(build_source(config));
    if config.seed_last_known {
        if config.source != SourceKind::Simulated {
            warn!(
                "Ignoring simulated last_known seed: source is {:?}",
                config.source
            );
        } else if config.simulated_fault.is_none() {
            info!("Seeding last-known position with the simulated fix");
            position = position.with_last_fix(Position::new(config.simulated_coords));
        }
    }
    position
}

pub fn build_acquirer(config: &ResolvedConfig, tx: mpsc::Sender<Action>) -> LocationAcquirer {
    LocationAcquirer::new(
        build_permission(config, tx),
        Arc::new(build_position_provider(config)),
    )
        .with_fresh_options(PositionOptions {
            maximum_age: config.maximum_age,
            ..Default::default()
        })
        .with_fresh_timeout(config.fresh_timeout)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let source_name = build_source(&config).name().to_string();
    let acquirer = build_acquirer(&config, tx.clone());
    let mut app = App::new(acquirer).with_map_delta(config.map_delta);
    let mut tui = TuiState::new(source_name);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Lifecycle: the screen exists, so the first attempt starts now
    let effect = update(&mut app, Action::Mount);
    apply_effect(&app, effect, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = !app.result.is_terminal();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = action_for(&app, event) {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                apply_effect(&app, effect, &tx);
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (finished attempts, permission prompts)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            apply_effect(&app, effect, &tx);
        }
    }

    // Closing an open prompt lets its attempt finish as dismissed
    app.pending_permission = None;

    ratatui::restore();
    Ok(())
}

/// Decide which core action, if any, a key stands for on the current screen.
fn action_for(app: &App, event: TuiEvent) -> Option<Action> {
    // Ctrl+C always quits, even over the dialog
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    // The permission dialog is modal
    if app.pending_permission.is_some() {
        return PermissionDialog::handle_event(&event).map(Action::PermissionAnswered);
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::Activate => present(&app.result, app.map_delta)
            .control()
            .map(|control| control.action.to_action()),
        _ => None,
    }
}

fn apply_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) {
    if let Effect::SpawnAcquisition(attempt) = effect {
        spawn_acquisition(app.acquirer.clone(), attempt, tx.clone());
    }
}

fn spawn_acquisition(acquirer: LocationAcquirer, attempt: AttemptId, tx: mpsc::Sender<Action>) {
    info!("Spawning location attempt {}", attempt);
    tokio::spawn(async move {
        let result = acquirer.acquire().await;
        if tx
            .send(Action::AcquisitionFinished { attempt, result })
            .is_err()
        {
            warn!(
                "Failed to report attempt {}: receiver dropped",
                attempt
            );
        }
    });
}
