use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use whereami::core::config::{self, CliOverrides};
use whereami::{PermissionMode, SourceKind, tui};

#[derive(Parser)]
#[command(name = "whereami", about = "Shows your current location on a terminal map")]
struct Args {
    /// Where position fixes come from
    #[arg(short, long, value_enum)]
    source: Option<SourceKind>,

    /// How the location permission request is answered
    #[arg(short, long, value_enum)]
    permission: Option<PermissionMode>,

    /// Latitude reported by the simulated source
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude reported by the simulated source
    #[arg(long, allow_negative_numbers = true)]
    lng: Option<f64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to whereami.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("whereami.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::WhereamiConfig::default()
    });
    let cli = CliOverrides {
        source: args.source,
        permission: args.permission,
        latitude: args.lat,
        longitude: args.lng,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "whereami starting up: source={:?}, permission={:?}",
        resolved.source,
        resolved.permission
    );

    tui::run(resolved)
}
