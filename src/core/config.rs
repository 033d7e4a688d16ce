//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.whereami/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::state::DEFAULT_MAP_DELTA;
use crate::location::providers::ip::DEFAULT_IP_API_BASE_URL;
use crate::location::types::DEFAULT_MAXIMUM_AGE;
use crate::location::Coordinates;
use crate::{PermissionMode, SourceKind};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WhereamiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub simulated: SimulatedConfig,
    #[serde(default)]
    pub ip: IpConfig,
    #[serde(default)]
    pub position: PositionConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub source: Option<SourceKind>,
    pub permission: Option<PermissionMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulatedConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Seed the last-known cache with the simulated fix at startup.
    pub last_known: Option<bool>,
    /// Make every simulated fix fail with this message.
    pub fault: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IpConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PositionConfig {
    pub maximum_age_ms: Option<u64>,
    pub fresh_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapConfig {
    pub delta: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Zócalo, Mexico City.
pub const DEFAULT_SIMULATED_LATITUDE: f64 = 19.432608;
pub const DEFAULT_SIMULATED_LONGITUDE: f64 = -99.133209;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: SourceKind,
    pub permission: PermissionMode,
    pub simulated_coords: Coordinates,
    pub seed_last_known: bool,
    pub simulated_fault: Option<String>,
    pub ip_base_url: String,
    pub maximum_age: Duration,
    pub fresh_timeout: Option<Duration>,
    pub map_delta: f64,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source: Option<SourceKind>,
    pub permission: Option<PermissionMode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.whereami/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".whereami").join("config.toml"))
}

/// Load config from `~/.whereami/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WhereamiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WhereamiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WhereamiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WhereamiConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: WhereamiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# whereami Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "simulated"               # "simulated" or "ip" (WHEREAMI_SOURCE)
# permission = "prompt"              # "prompt", "granted", "denied" (WHEREAMI_PERMISSION)

# [simulated]
# latitude = 19.432608               # WHEREAMI_LAT
# longitude = -99.133209             # WHEREAMI_LNG
# last_known = false                 # start with a cached fix
# fault = "Location services disabled"

# [ip]
# base_url = "http://ip-api.com"     # WHEREAMI_IP_API_URL

# [position]
# maximum_age_ms = 1000
# fresh_timeout_ms = 10000           # unset = wait forever

# [map]
# delta = 0.01                       # span of the map in degrees
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WhereamiConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Source: CLI → env → config → default
    let source = cli
        .source
        .or_else(|| env_enum::<SourceKind>("WHEREAMI_SOURCE"))
        .or(config.general.source)
        .unwrap_or_default();

    // Permission: CLI → env → config → default
    let permission = cli
        .permission
        .or_else(|| env_enum::<PermissionMode>("WHEREAMI_PERMISSION"))
        .or(config.general.permission)
        .unwrap_or_default();

    let latitude = cli
        .latitude
        .or_else(|| env_f64("WHEREAMI_LAT"))
        .or(config.simulated.latitude)
        .unwrap_or(DEFAULT_SIMULATED_LATITUDE);
    let longitude = cli
        .longitude
        .or_else(|| env_f64("WHEREAMI_LNG"))
        .or(config.simulated.longitude)
        .unwrap_or(DEFAULT_SIMULATED_LONGITUDE);

    // IP API base URL: env → config → default
    let ip_base_url = std::env::var("WHEREAMI_IP_API_URL")
        .ok()
        .or_else(|| config.ip.base_url.clone())
        .unwrap_or_else(|| DEFAULT_IP_API_BASE_URL.to_string());

    let map_delta = match config.map.delta {
        Some(delta) if delta > 0.0 && delta.is_finite() => delta,
        Some(delta) => {
            warn!("Ignoring invalid map delta {}", delta);
            DEFAULT_MAP_DELTA
        }
        None => DEFAULT_MAP_DELTA,
    };

    ResolvedConfig {
        source,
        permission,
        simulated_coords: Coordinates::new(latitude, longitude),
        seed_last_known: config.simulated.last_known.unwrap_or(false),
        simulated_fault: config.simulated.fault.clone(),
        ip_base_url,
        maximum_age: config
            .position
            .maximum_age_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MAXIMUM_AGE),
        fresh_timeout: config.position.fresh_timeout_ms.map(Duration::from_millis),
        map_delta,
    }
}

fn env_enum<T: ValueEnum>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = WhereamiConfig::default();
        assert!(config.general.source.is_none());
        assert!(config.simulated.fault.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = WhereamiConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.maximum_age, Duration::from_millis(1000));
        assert_eq!(resolved.fresh_timeout, None);
        assert_eq!(resolved.map_delta, 0.01);
        assert!(!resolved.seed_last_known);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WhereamiConfig {
            simulated: SimulatedConfig {
                last_known: Some(true),
                fault: Some("Location services disabled".to_string()),
                ..Default::default()
            },
            position: PositionConfig {
                maximum_age_ms: Some(250),
                fresh_timeout_ms: Some(5000),
            },
            map: MapConfig { delta: Some(0.5) },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(resolved.seed_last_known);
        assert_eq!(
            resolved.simulated_fault.as_deref(),
            Some("Location services disabled")
        );
        assert_eq!(resolved.maximum_age, Duration::from_millis(250));
        assert_eq!(resolved.fresh_timeout, Some(Duration::from_secs(5)));
        assert_eq!(resolved.map_delta, 0.5);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = WhereamiConfig {
            general: GeneralConfig {
                source: Some(SourceKind::Ip),
                permission: Some(PermissionMode::Denied),
            },
            simulated: SimulatedConfig {
                latitude: Some(1.0),
                longitude: Some(2.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            source: Some(SourceKind::Simulated),
            permission: Some(PermissionMode::Granted),
            latitude: Some(40.416775),
            longitude: Some(-3.70379),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.source, SourceKind::Simulated);
        assert_eq!(resolved.permission, PermissionMode::Granted);
        assert_eq!(
            resolved.simulated_coords,
            Coordinates::new(40.416775, -3.70379)
        );
    }

    #[test]
    fn test_invalid_map_delta_falls_back() {
        let config = WhereamiConfig {
            map: MapConfig { delta: Some(-1.0) },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.map_delta, DEFAULT_MAP_DELTA);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
source = "ip"
permission = "granted"

[simulated]
latitude = 19.432608
longitude = -99.133209
last_known = true

[ip]
base_url = "http://localhost:9999"

[position]
maximum_age_ms = 2000

[map]
delta = 0.02
"#;
        let config: WhereamiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.source, Some(SourceKind::Ip));
        assert_eq!(config.general.permission, Some(PermissionMode::Granted));
        assert_eq!(config.simulated.latitude, Some(19.432608));
        assert_eq!(config.simulated.last_known, Some(true));
        assert_eq!(config.ip.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.position.maximum_age_ms, Some(2000));
        assert!(config.position.fresh_timeout_ms.is_none());
        assert_eq!(config.map.delta, Some(0.02));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[general]
permission = "denied"
"#;
        let config: WhereamiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.permission, Some(PermissionMode::Denied));
        assert!(config.general.source.is_none());
        assert!(config.simulated.latitude.is_none());
    }

    #[test]
    fn test_unknown_source_is_a_parse_error() {
        let toml_str = r#"
[general]
source = "satellite"
"#;
        assert!(toml::from_str::<WhereamiConfig>(toml_str).is_err());
    }
}
