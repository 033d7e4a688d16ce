//! # Application State
//!
//! Core screen state for whereami. Domain data only; presentation state
//! (spinner frame, terminal size) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── acquirer: LocationAcquirer           // permission + position providers
//! ├── result: AcquisitionResult            // Loading | Failed | Succeeded
//! ├── latest_attempt: AttemptId            // only this attempt may finish
//! ├── status_message: String               // title bar text
//! ├── pending_permission: Option<Request>  // open permission dialog
//! └── map_delta: f64                       // region span in degrees
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

use crate::location::{AcquisitionResult, LocationAcquirer, PermissionRequest};

/// Region span used when none is configured: a close, street-level zoom.
pub const DEFAULT_MAP_DELTA: f64 = 0.01;

/// Identifies one acquisition attempt. Strictly increasing; `AttemptId(0)`
/// means nothing has been started yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(pub u64);

impl AttemptId {
    pub fn next(self) -> Self {
        AttemptId(self.0 + 1)
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct App {
    pub acquirer: LocationAcquirer,
    pub result: AcquisitionResult,
    pub latest_attempt: AttemptId,
    pub status_message: String,
    /// Set while a permission prompt waits for the user.
    pub pending_permission: Option<PermissionRequest>,
    pub map_delta: f64,
}

impl App {
    pub fn new(acquirer: LocationAcquirer) -> Self {
        Self {
            acquirer,
            result: AcquisitionResult::Loading,
            latest_attempt: AttemptId::default(),
            status_message: String::new(),
            pending_permission: None,
            map_delta: DEFAULT_MAP_DELTA,
        }
    }

    pub fn with_map_delta(mut self, delta: f64) -> Self {
        self.map_delta = delta;
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.latest_attempt != AttemptId::default()
    }
}
