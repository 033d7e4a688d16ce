//! Permission providers.
//!
//! - `StaticPermission`: a fixed answer from configuration.
//! - `PromptPermission`: asks the user through whatever UI owns the other
//!   end of its channel, and waits for the reply.

use std::fmt;
use std::sync::mpsc;

use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::oneshot;

use crate::location::{LocationError, PermissionProvider, PermissionStatus};

pub struct StaticPermission {
    status: PermissionStatus,
}

impl StaticPermission {
    pub fn new(status: PermissionStatus) -> Self {
        Self { status }
    }
}

#[async_trait]
impl PermissionProvider for StaticPermission {
    fn name(&self) -> &str {
        "static"
    }

    async fn request_foreground_permission(&self) -> Result<PermissionStatus, LocationError> {
        Ok(self.status)
    }
}

/// A pending question to the user. Dropping it unanswered dismisses the request.
pub struct PermissionRequest {
    reply: oneshot::Sender<PermissionStatus>,
}

impl PermissionRequest {
    pub fn channel() -> (Self, oneshot::Receiver<PermissionStatus>) {
        let (reply, rx) = oneshot::channel();
        (Self { reply }, rx)
    }

    pub fn answer(self, status: PermissionStatus) {
        if self.reply.send(status).is_err() {
            warn!("Permission answer dropped: requester is gone");
        }
    }
}

impl fmt::Debug for PermissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionRequest")
            .field("open", &!self.reply.is_closed())
            .finish()
    }
}

/// Forwards each request to a UI event loop as an `A`, built by `wrap`.
pub struct PromptPermission<A> {
    sender: mpsc::Sender<A>,
    wrap: fn(PermissionRequest) -> A,
}

impl<A> PromptPermission<A> {
    pub fn new(sender: mpsc::Sender<A>, wrap: fn(PermissionRequest) -> A) -> Self {
        Self { sender, wrap }
    }
}

#[async_trait]
impl<A: Send + 'static> PermissionProvider for PromptPermission<A> {
    fn name(&self) -> &str {
        "prompt"
    }

    async fn request_foreground_permission(&self) -> Result<PermissionStatus, LocationError> {
        let (request, answer) = PermissionRequest::channel();
        self.sender
            .send((self.wrap)(request))
            .map_err(|_| LocationError::Dismissed)?;
        info!("Waiting for the user to answer the location permission prompt");
        answer.await.map_err(|_| LocationError::Dismissed)
    }
}
