//! # View Presenter
//!
//! Turns an `AcquisitionResult` into a `RenderedView`: plain data describing
//! what the screen shows, independent of how it is drawn.
//!
//! | Result           | View                                              |
//! |------------------|---------------------------------------------------|
//! | `Loading`        | `Status` message, no controls                     |
//! | `Failed(msg)`    | `Error` message (fallback if empty) + retry       |
//! | `Succeeded(c)`   | `Map` centered on `c`, marker, panel + refresh    |
//!
//! Controls carry the `Action` they trigger, so the adapter only has to
//! dispatch whichever control is on screen.

use crate::core::action::{Action, LOADING_STATUS};
use crate::location::{AcquisitionResult, Coordinates};

pub const UNKNOWN_ERROR_MESSAGE: &str = "error desconocido";
pub const MARKER_TITLE: &str = "Tu ubicación";
pub const PANEL_TITLE: &str = "Tu ubicacion";
pub const RETRY_LABEL: &str = "Reintentar";
pub const REFRESH_LABEL: &str = "Actualizar";

/// Named colors; the adapter picks the concrete shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Blue,
}

/// What a control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Retry,
    Refresh,
}

impl ControlAction {
    pub fn to_action(self) -> Action {
        match self {
            ControlAction::Retry => Action::Retry,
            ControlAction::Refresh => Action::Refresh,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub label: &'static str,
    pub action: ControlAction,
    pub tint: Tint,
}

/// The visible map area: a center plus its span in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn centered_on(coords: Coordinates, delta: f64) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }

    /// `[west, east]` edges.
    pub fn longitude_bounds(&self) -> [f64; 2] {
        let half = self.longitude_delta / 2.0;
        [self.longitude - half, self.longitude + half]
    }

    /// `[south, north]` edges.
    pub fn latitude_bounds(&self) -> [f64; 2] {
        let half = self.latitude_delta / 2.0;
        [self.latitude - half, self.latitude + half]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub coordinate: Coordinates,
    pub title: String,
    pub description: String,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    Status {
        message: String,
    },
    Error {
        message: String,
        retry: Control,
    },
    Map {
        region: MapRegion,
        markers: Vec<MapMarker>,
        panel_title: String,
        panel_lines: Vec<String>,
        refresh: Control,
    },
}

impl RenderedView {
    /// The single interactive control on screen, if any.
    pub fn control(&self) -> Option<&Control> {
        match self {
            RenderedView::Status { .. } => None,
            RenderedView::Error { retry, .. } => Some(retry),
            RenderedView::Map { refresh, .. } => Some(refresh),
        }
    }
}

/// Six decimal places, roughly 10 cm at the equator.
pub fn format_degrees(value: f64) -> String {
    format!("{value:.6}")
}

pub fn present(result: &AcquisitionResult, map_delta: f64) -> RenderedView {
    match result {
        AcquisitionResult::Loading => RenderedView::Status {
            message: LOADING_STATUS.to_string(),
        },
        AcquisitionResult::Failed(message) => {
            let message = if message.trim().is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message.clone()
            };
            RenderedView::Error {
                message,
                retry: Control {
                    label: RETRY_LABEL,
                    action: ControlAction::Retry,
                    tint: Tint::Blue,
                },
            }
        }
        AcquisitionResult::Succeeded(coords) => {
            let lat = format_degrees(coords.latitude);
            let lng = format_degrees(coords.longitude);
            RenderedView::Map {
                region: MapRegion::centered_on(*coords, map_delta),
                markers: vec![MapMarker {
                    coordinate: *coords,
                    title: MARKER_TITLE.to_string(),
                    description: format!("Lat: {lat}, Lng: {lng}"),
                    tint: Tint::Red,
                }],
                panel_title: PANEL_TITLE.to_string(),
                panel_lines: vec![format!("Lat: {lat}"), format!("Lng: {lng}")],
                refresh: Control {
                    label: REFRESH_LABEL,
                    action: ControlAction::Refresh,
                    tint: Tint::Blue,
                },
            }
        }
    }
}
