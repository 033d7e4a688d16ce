//! # Location Acquisition
//!
//! One attempt walks a fixed chain, each step a suspension point:
//!
//! ```text
//! permission ──denied──▶ Failed("permiso de ubicacion negado")
//!     │ granted
//!     ▼
//! last-known ──Some──▶ Succeeded(cached coords)   (age is not checked)
//!     │ None
//!     ▼
//! current (Balanced, maximum_age 1s) ──▶ Succeeded(fresh coords)
//! ```
//!
//! Any provider fault along the way ends the attempt as `Failed(fault)`.
//! Nothing is retried here; the user retries from the UI.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use super::provider::{LocationError, PermissionProvider, PositionProvider};
use super::types::{AcquisitionResult, Coordinates, LastKnownOptions, Position, PositionOptions};

/// Failure message shown when location access is not granted.
pub const PERMISSION_DENIED_MESSAGE: &str = "permiso de ubicacion negado";

#[derive(Clone)]
pub struct LocationAcquirer {
    permission: Arc<dyn PermissionProvider>,
    position: Arc<dyn PositionProvider>,
    fresh_options: PositionOptions,
    fresh_timeout: Option<Duration>,
}

impl LocationAcquirer {
    pub fn new(permission: Arc<dyn PermissionProvider>, position: Arc<dyn PositionProvider>) -> Self {
        Self {
            permission,
            position,
            fresh_options: PositionOptions::default(),
            fresh_timeout: None,
        }
    }

    pub fn with_fresh_options(mut self, options: PositionOptions) -> Self {
        self.fresh_options = options;
        self
    }

    /// Bounds the fresh-position fetch. Unbounded unless set.
    pub fn with_fresh_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fresh_timeout = timeout;
        self
    }

    pub fn fresh_options(&self) -> PositionOptions {
        self.fresh_options
    }

    /// Runs one attempt to a terminal result. Never returns `Loading`.
    pub async fn acquire(&self) -> AcquisitionResult {
        match self.try_acquire().await {
            Ok(Some(coords)) => {
                info!(
                    "Location acquired: lat={:.6}, lng={:.6}",
                    coords.latitude, coords.longitude
                );
                AcquisitionResult::Succeeded(coords)
            }
            Ok(None) => AcquisitionResult::Failed(PERMISSION_DENIED_MESSAGE.to_string()),
            Err(e) => {
                warn!("Location acquisition failed: {}", e);
                AcquisitionResult::Failed(e.to_string())
            }
        }
    }

    /// `Ok(None)` means permission was not granted.
    async fn try_acquire(&self) -> Result<Option<Coordinates>, LocationError> {
        let status = self.permission.request_foreground_permission().await?;
        info!(
            "Permission provider '{}' answered {:?}",
            self.permission.name(),
            status
        );
        if !status.is_granted() {
            return Ok(None);
        }

        let cached = self
            .position
            .last_known_position(&LastKnownOptions::default())
            .await?;
        if let Some(fix) = cached {
            debug!("Using last-known position from {}", fix.timestamp.to_rfc3339());
            return Ok(Some(fix.coords));
        }

        debug!(
            "No last-known position from '{}', requesting a fresh fix ({:?})",
            self.position.name(),
            self.fresh_options
        );
        let fix = self.fetch_fresh().await?;
        Ok(Some(fix.coords))
    }

    async fn fetch_fresh(&self) -> Result<Position, LocationError> {
        let request = self.position.current_position(&self.fresh_options);
        match self.fresh_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| LocationError::Timeout)?,
            None => request.await,
        }
    }
}
