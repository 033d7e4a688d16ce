//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::App;
use crate::location::{
    Coordinates, LastKnownOptions, LocationAcquirer, LocationError, PermissionProvider,
    PermissionStatus, Position, PositionOptions, PositionProvider,
};

/// Permission provider with a canned answer that counts how often it was asked.
pub struct MockPermission {
    answer: Result<PermissionStatus, LocationError>,
    calls: AtomicUsize,
}

impl MockPermission {
    pub fn answering(status: PermissionStatus) -> Self {
        Self {
            answer: Ok(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: LocationError) -> Self {
        Self {
            answer: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionProvider for MockPermission {
    fn name(&self) -> &str {
        "mock"
    }

    async fn request_foreground_permission(&self) -> Result<PermissionStatus, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

/// A call recorded by `MockPosition`, with the options it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionCall {
    LastKnown(LastKnownOptions),
    Current(PositionOptions),
}

/// Position provider with canned answers that records every call.
pub struct MockPosition {
    last_known: Result<Option<Position>, LocationError>,
    current: Result<Position, LocationError>,
    hang_on_current: bool,
    calls: Mutex<Vec<PositionCall>>,
}

impl MockPosition {
    pub fn new(
        last_known: Result<Option<Position>, LocationError>,
        current: Result<Position, LocationError>,
    ) -> Self {
        Self {
            last_known,
            current,
            hang_on_current: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Has a last-known fix at `coords`; a fresh fetch would fail loudly.
    pub fn cached(coords: Coordinates) -> Self {
        Self::new(
            Ok(Some(Position::new(coords))),
            Err(LocationError::Unavailable("fresh fetch not expected".into())),
        )
    }

    /// No last-known fix; a fresh fetch returns `coords`.
    pub fn fresh_only(coords: Coordinates) -> Self {
        Self::new(Ok(None), Ok(Position::new(coords)))
    }

    /// No last-known fix; a fresh fetch never completes.
    pub fn hanging() -> Self {
        let mut mock = Self::fresh_only(Coordinates::new(0.0, 0.0));
        mock.hang_on_current = true;
        mock
    }

    pub fn calls(&self) -> Vec<PositionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PositionProvider for MockPosition {
    fn name(&self) -> &str {
        "mock"
    }

    async fn last_known_position(
        &self,
        options: &LastKnownOptions,
    ) -> Result<Option<Position>, LocationError> {
        self.calls.lock().unwrap().push(PositionCall::LastKnown(*options));
        self.last_known.clone()
    }

    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError> {
        self.calls.lock().unwrap().push(PositionCall::Current(*options));
        if self.hang_on_current {
            std::future::pending::<()>().await;
        }
        self.current.clone()
    }
}

/// Builds an acquirer over the mocks and hands back shared handles to inspect them.
pub fn acquirer_with(
    permission: MockPermission,
    position: MockPosition,
) -> (LocationAcquirer, Arc<MockPermission>, Arc<MockPosition>) {
    let permission = Arc::new(permission);
    let position = Arc::new(position);
    let acquirer = LocationAcquirer::new(permission.clone(), position.clone());
    (acquirer, permission, position)
}

/// Creates a test App whose acquirer always finds a cached fix in Mexico City.
pub fn test_app() -> App {
    let (acquirer, _, _) = acquirer_with(
        MockPermission::answering(PermissionStatus::Granted),
        MockPosition::cached(Coordinates::new(19.432608, -99.133209)),
    );
    App::new(acquirer)
}

/// Flattens a rendered buffer into one string (rows concatenated) for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
