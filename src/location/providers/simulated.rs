//! Simulated device GPS: reports configured coordinates, or a configured fault.

use async_trait::async_trait;
use log::debug;

use crate::location::{Accuracy, Coordinates, LocationError, PositionSource};

pub struct SimulatedSource {
    coords: Coordinates,
    fault: Option<String>,
}

impl SimulatedSource {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords, fault: None }
    }

    /// A source whose every fetch fails with `message`, like a GPS with
    /// location services switched off.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            coords: Coordinates::new(0.0, 0.0),
            fault: Some(message.into()),
        }
    }
}

#[async_trait]
impl PositionSource for SimulatedSource {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn fetch(&self, accuracy: Accuracy) -> Result<Coordinates, LocationError> {
        debug!("Simulated fix requested (accuracy={:?})", accuracy);
        match &self.fault {
            Some(message) => Err(LocationError::Unavailable(message.clone())),
            None => Ok(self.coords),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reports_configured_coordinates() {
        let source = SimulatedSource::new(Coordinates::new(19.432608, -99.133209));
        let coords = source.fetch(Accuracy::Balanced).await.unwrap();
        assert_eq!(coords, Coordinates::new(19.432608, -99.133209));
    }

    #[tokio::test]
    async fn test_failing_source_reports_message() {
        let source = SimulatedSource::failing("Location services disabled");
        let err = source.fetch(Accuracy::High).await.unwrap_err();
        assert_eq!(err.to_string(), "Location services disabled");
    }
}
