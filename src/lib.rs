//! whereami library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod location;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where fixes come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Configured coordinates, standing in for a device GPS
    #[default]
    Simulated,
    /// Coarse position from the public IP address
    Ip,
}

/// How the location permission question is answered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    /// Ask in a dialog on every attempt
    #[default]
    Prompt,
    Granted,
    Denied,
}
