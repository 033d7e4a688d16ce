//! IP-based position source using the ip-api.com JSON endpoint.
//!
//! Coarse (city level) and ignores the requested accuracy, but works on
//! machines without a GPS. Only coordinates are requested; no place names.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::location::{Accuracy, Coordinates, LocationError, PositionSource};

pub const DEFAULT_IP_API_BASE_URL: &str = "http://ip-api.com";

/// Response body of `GET /json?fields=status,message,lat,lon`.
#[derive(Deserialize, Debug)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

pub struct IpApiSource {
    base_url: String,
    client: reqwest::Client,
}

impl IpApiSource {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_IP_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PositionSource for IpApiSource {
    fn name(&self) -> &str {
        "ip-api"
    }

    async fn fetch(&self, accuracy: Accuracy) -> Result<Coordinates, LocationError> {
        info!(
            "IP geolocation request to {} (accuracy {:?} not supported, ignored)",
            self.base_url, accuracy
        );

        let response = self
            .client
            .get(format!("{}/json", self.base_url))
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| LocationError::Network(e.to_string()))?;

        debug!("IP geolocation response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("IP geolocation error: {} - {}", status, message);
            return Err(LocationError::Api { status, message });
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Parse(e.to_string()))?;

        if body.status != "success" {
            let message = body
                .message
                .unwrap_or_else(|| format!("lookup failed with status '{}'", body.status));
            warn!("IP geolocation lookup failed: {}", message);
            return Err(LocationError::Unavailable(message));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(LocationError::Parse(
                "response is missing lat/lon".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let source = IpApiSource::new(None);
        assert_eq!(source.base_url, DEFAULT_IP_API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = IpApiSource::new(Some("http://localhost:8080/".to_string()));
        assert_eq!(source.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_failure_body_parses_without_coordinates() {
        let body: IpApiResponse =
            serde_json::from_str(r#"{"status":"fail","message":"private range"}"#).unwrap();
        assert_eq!(body.status, "fail");
        assert_eq!(body.message.as_deref(), Some("private range"));
        assert!(body.lat.is_none());
    }
}
