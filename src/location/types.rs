//! Location domain types shared by providers, the acquirer, and the UI.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default `maximum_age` for fresh position requests.
pub const DEFAULT_MAXIMUM_AGE: Duration = Duration::from_millis(1000);

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A fix reported by a position provider: coordinates plus when they were taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coords: Coordinates,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    /// A fix taken right now.
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords,
            timestamp: Utc::now(),
        }
    }

    pub fn at(coords: Coordinates, timestamp: DateTime<Utc>) -> Self {
        Self { coords, timestamp }
    }

    /// How old this fix is relative to `now`. Fixes from the future count as fresh.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.timestamp).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Outcome of a foreground permission request.
///
/// Provider-specific values collapse into these three. Only `Granted`
/// allows the acquisition to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Precision/power tiers for a fresh position request, coarsest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    Lowest,
    Low,
    #[default]
    Balanced,
    High,
    Highest,
    BestForNavigation,
}

/// Options for `PositionProvider::current_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub accuracy: Accuracy,
    /// A fix at most this old may be returned instead of taking a new one.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::Balanced,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

/// Options for `PositionProvider::last_known_position`.
///
/// `None` means the provider default: any cached fix is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastKnownOptions {
    pub max_age: Option<Duration>,
}

/// The single source of truth for the location screen.
///
/// Exactly one variant is active. Every attempt starts at `Loading` and
/// moves to `Failed` or `Succeeded` once.
#[derive(Debug, Clone, PartialEq)]
pub enum AcquisitionResult {
    Loading,
    Failed(String),
    Succeeded(Coordinates),
}

impl AcquisitionResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AcquisitionResult::Loading)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            AcquisitionResult::Succeeded(coords) => Some(*coords),
            _ => None,
        }
    }
}
