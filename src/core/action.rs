//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! The screen appears? That's `Action::Mount`.
//! An attempt finishes? That's `Action::AcquisitionFinished { attempt, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! happens here; spawning the acquisition task is the adapter's job.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Attempts are stamped with an `AttemptId`. Only the latest started attempt
//! may write a terminal result, so a slow attempt that resolves after a
//! newer one started is dropped instead of clobbering the screen.

use log::{debug, info, warn};

use crate::core::state::{App, AttemptId};
use crate::location::{AcquisitionResult, PermissionRequest, PermissionStatus};

pub const LOADING_STATUS: &str = "Obteniendo ubicación...";
pub const LOCATED_STATUS: &str = "Ubicación obtenida";
pub const FAILED_STATUS: &str = "Error";

#[derive(Debug)]
pub enum Action {
    /// The screen was created. Starts the first attempt, once.
    Mount,
    /// Retry control on the error view.
    Retry,
    /// Refresh control on the map view.
    Refresh,
    AcquisitionFinished {
        attempt: AttemptId,
        result: AcquisitionResult,
    },
    PermissionRequested(PermissionRequest),
    PermissionAnswered(PermissionStatus),
    Quit,
}

/// Side effects the adapter must perform after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `acquirer.acquire()` in the background and report back with this id.
    SpawnAcquisition(AttemptId),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.is_mounted() {
                debug!("Mount ignored: already mounted");
                return Effect::None;
            }
            start_attempt(app)
        }
        Action::Retry => {
            if !matches!(app.result, AcquisitionResult::Failed(_)) {
                debug!("Retry ignored: no error on screen");
                return Effect::None;
            }
            start_attempt(app)
        }
        Action::Refresh => {
            if !matches!(app.result, AcquisitionResult::Succeeded(_)) {
                debug!("Refresh ignored: no location on screen");
                return Effect::None;
            }
            start_attempt(app)
        }
        Action::AcquisitionFinished { attempt, result } => {
            if attempt != app.latest_attempt {
                warn!(
                    "Dropping stale result of attempt {} (latest is {})",
                    attempt, app.latest_attempt
                );
                return Effect::None;
            }
            if !result.is_terminal() {
                warn!("Attempt {} reported a non-terminal result", attempt);
                return Effect::None;
            }
            info!("Attempt {} finished: {:?}", attempt, result);
            app.status_message = match result.coordinates() {
                Some(_) => LOCATED_STATUS.to_string(),
                None => FAILED_STATUS.to_string(),
            };
            app.result = result;
            // A prompt can only belong to an attempt that is still running.
            app.pending_permission = None;
            Effect::None
        }
        Action::PermissionRequested(request) => {
            if app.pending_permission.is_some() {
                warn!("New permission prompt replaces an unanswered one");
            }
            app.pending_permission = Some(request);
            Effect::None
        }
        Action::PermissionAnswered(status) => {
            match app.pending_permission.take() {
                Some(request) => {
                    info!("User answered permission prompt: {:?}", status);
                    request.answer(status);
                }
                None => debug!("Permission answer with no open prompt"),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn start_attempt(app: &mut App) -> Effect {
    let attempt = app.latest_attempt.next();
    app.latest_attempt = attempt;
    app.result = AcquisitionResult::Loading;
    app.status_message = LOADING_STATUS.to_string();
    info!("Starting location attempt {}", attempt);
    Effect::SpawnAcquisition(attempt)
}
