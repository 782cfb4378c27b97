pub mod client;
pub mod collectors;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod renderer;
pub mod utils;

use crate::client::JsonFileManager;
use crate::config::AppConfig;
use crate::dashboard::StatusDisplay;
use anyhow::Context;
use log::{error, info};
use std::time::Duration;

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting status display");

    tokio::select! {
        result = main_loop(&config) => {
            match result {
                Ok(_) => info!("Status display completed successfully"),
                Err(e) => {
                    error!("Status display error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e).context("Status display failed to run");
                }
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            info!("Interrupted, stopping status display");
        }
    }

    Ok(())
}

async fn main_loop(config: &AppConfig) -> anyhow::Result<()> {
    let manager = JsonFileManager::new(
        &config.manager.status_file,
        config.manager.application_path(),
    );
    let mut display = StatusDisplay::from_config(&config.display);
    if !display.active() {
        anyhow::bail!("No usable {} display surface", display.renderer_name());
    }
    info!(
        "Refreshing {} display every {} s from {}",
        display.renderer_name(),
        config.display.interval,
        config.manager.status_file
    );

    let mut interval = tokio::time::interval(Duration::from_secs(config.display.poll.max(1)));
    let mut force = true;
    loop {
        interval.tick().await; // Wait for the next tick
        display.update(Some(&manager), force);
        force = false;
    }
}
