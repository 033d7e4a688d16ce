use std::fmt;

use async_trait::async_trait;

use super::types::{
    Accuracy, Coordinates, LastKnownOptions, PermissionStatus, Position, PositionOptions,
};

/// Faults raised by permission and position providers.
///
/// The `Display` text is what the user ends up seeing, so variants that wrap
/// a device or service message print it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// Hardware or location service unavailable (disabled, no fix, no signal).
    Unavailable(String),
    /// Network-level failure reaching a networked position source.
    Network(String),
    /// A networked position source answered with an error status.
    Api { status: u16, message: String },
    /// A position source answered with something we could not read.
    Parse(String),
    /// The optional fresh-position timeout elapsed.
    Timeout,
    /// The permission prompt went away without an answer.
    Dismissed,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::Unavailable(msg) => write!(f, "{msg}"),
            LocationError::Network(msg) => write!(f, "error de red: {msg}"),
            LocationError::Api { status, message } => {
                write!(f, "error del servicio de ubicación (HTTP {status}): {message}")
            }
            LocationError::Parse(msg) => write!(f, "respuesta de ubicación ilegible: {msg}"),
            LocationError::Timeout => write!(f, "tiempo de espera agotado al obtener la ubicación"),
            LocationError::Dismissed => write!(f, "solicitud de permiso cerrada sin respuesta"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Grants or refuses access to the device location while the app is in use.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn request_foreground_permission(&self) -> Result<PermissionStatus, LocationError>;
}

/// Answers position queries, with a cached fast path and a fresh fetch.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    fn name(&self) -> &str;

    /// The most recent cached fix, if any. Never triggers a new fix.
    async fn last_known_position(
        &self,
        options: &LastKnownOptions,
    ) -> Result<Option<Position>, LocationError>;

    /// A fix no older than `options.maximum_age`, taking a new one if needed.
    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError>;
}

/// A raw fix source (a GPS, a simulator, a network lookup).
///
/// Sources know nothing about caching; `CachedPositionProvider` turns one
/// into a `PositionProvider`.
#[async_trait]
pub trait PositionSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, accuracy: Accuracy) -> Result<Coordinates, LocationError>;
}
