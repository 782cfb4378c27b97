use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_interval() -> u64 {
    10
}

fn default_poll() -> u64 {
    1
}

fn default_renderer() -> String {
    "text".to_string()
}

fn default_html_file() -> String {
    "vine-status.html".to_string()
}

fn default_status_file() -> String {
    "vine-status.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Minimum seconds between two refreshes.
    #[serde(default = "default_interval")]
    pub interval: u64,
    /// Seconds between two refresh attempts of the binary.
    #[serde(default = "default_poll")]
    pub poll: u64,
    #[serde(default = "default_renderer")]
    pub renderer: String,
    #[serde(default = "default_html_file")]
    pub html_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ManagerConfig {
    #[serde(default = "default_status_file")]
    pub status_file: String,
    #[serde(default)]
    pub application_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub manager: ManagerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            poll: default_poll(),
            renderer: default_renderer(),
            html_file: default_html_file(),
        }
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            status_file: default_status_file(),
            application_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ManagerConfig {
    pub fn application_path(&self) -> Option<PathBuf> {
        self.application_file
            .as_deref()
            .filter(|f| !f.is_empty())
            .map(PathBuf::from)
    }
}

impl AppConfig {
    pub const DEFAULT_PATH: &'static str = "config.ini";

    pub fn new() -> Result<Self> {
        Self::from_file(Self::DEFAULT_PATH)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!(
            "[display]\ninterval = {}\npoll = {}\nrenderer = {}\nhtml_file = {}\n\n",
            self.display.interval, self.display.poll, self.display.renderer, self.display.html_file
        ));

        config_str.push_str(&format!(
            "[manager]\nstatus_file = {}\n",
            self.manager.status_file
        ));
        if let Some(application_file) = &self.manager.application_file {
            config_str.push_str(&format!("application_file = {}\n", application_file));
        }
        config_str.push('\n');

        config_str.push_str(&format!("[logging]\nlevel = {}\n", self.logging.level));

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
