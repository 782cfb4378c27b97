use env_logger::{Builder, WriteStyle};
use log::{error, info};
use vinestatus::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (without logging)
    let mut write_default = false;
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {:#}", e);
        // Fall back to default configuration
        write_default = !std::path::Path::new(AppConfig::DEFAULT_PATH).exists();
        AppConfig::default()
    });

    // Initialise logger with a configured log level
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Always)
        .format_timestamp_secs()
        .init();

    if write_default {
        match config.save(AppConfig::DEFAULT_PATH) {
            Ok(()) => info!("Wrote default configuration"),
            Err(e) => error!("Could not write default configuration: {:#}", e),
        }
    }

    if let Err(e) = vinestatus::run(config).await {
        error!("Application error: {}", e);
        return Err(e);
    }
    Ok(())
}
