use crate::constants::{self, env_vars};
use crate::data_fetcher::api::PollPolicy;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{normalize_base_url, validate_config};

/// Configuration structure for the scraper.
/// Every field has a default, so a missing config file is not an error.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Site the tournament pages are served from. Should include https:// prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for page loads.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Directory the CSV files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// How many times the pools page is reloaded while waiting for pool ids.
    #[serde(default = "default_pool_poll_attempts")]
    pub pool_poll_attempts: u32,
    /// Delay between pools page reloads in milliseconds.
    #[serde(default = "default_pool_poll_interval_ms")]
    pub pool_poll_interval_ms: u64,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_pool_poll_attempts() -> u32 {
    constants::polling::POOL_ID_ATTEMPTS
}

fn default_pool_poll_interval_ms() -> u64 {
    constants::polling::POOL_ID_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            output_dir: default_output_dir(),
            pool_poll_attempts: default_pool_poll_attempts(),
            pool_poll_interval_ms: default_pool_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FTL_BASE_URL` - Override site base URL
    /// - `FTL_LOG_FILE` - Override log file path
    /// - `FTL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FTL_OUTPUT_DIR` - Override CSV output directory
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - A missing config file yields the defaults
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.base_url = normalize_base_url(&config.base_url);
        config.validate()?;

        Ok(config)
    }

    /// Applies `FTL_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.base_url,
            &self.log_file_path,
            self.pool_poll_attempts,
        )
    }

    /// Polling policy for discovering pool ids on the pools page.
    pub fn pool_poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            self.pool_poll_attempts,
            Duration::from_millis(self.pool_poll_interval_ms),
        )
    }

    /// Directory CSV files are written to.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", config.output_dir);
        println!("────────────────────────────────────");
        println!("Pool Id Polling:");
        println!(
            "{} attempts, {} ms apart",
            config.pool_poll_attempts, config.pool_poll_interval_ms
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the
    /// base URL before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            base_url: normalize_base_url(&self.base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let mut config: Config = toml::from_str(&content)?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }
}
