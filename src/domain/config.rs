//! # Configuration
//!
//! Manages the loading and parsing of the bot's configuration file (`config.yaml`).
//! Defines the structs for the Matrix login, the puzzle datastore and the command surface.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub bot: BotConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read, parse and resolve environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut config: AppConfig = serde_yaml::from_str(content)?;
        config.resolve_env()?;
        config.validate()?;
        Ok(config)
    }

    fn resolve_env(&mut self) -> Result<()> {
        let matrix = &mut self.services.matrix;
        if let Some(var) = &matrix.password_env {
            matrix.password = std::env::var(var)
                .with_context(|| format!("Environment variable {var} is not set"))?;
        }
        if let StoreConfig::Http {
            api_token,
            api_token_env: Some(var),
            ..
        } = &mut self.store
        {
            *api_token = Some(
                std::env::var(&*var)
                    .with_context(|| format!("Environment variable {var} is not set"))?,
            );
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.bot.hunt_id.trim().is_empty() {
            bail!("bot.hunt_id must not be empty");
        }
        if self.bot.prefix.trim().is_empty() {
            bail!("bot.prefix must not be empty");
        }
        if self.services.matrix.password.is_empty() {
            bail!("services.matrix.password (or password_env) is required");
        }
        Ok(())
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Name of an environment variable holding the password.
    #[serde(default)]
    pub password_env: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Command surface and hunt scoping.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Active hunt; every datastore query is restricted to it.
    pub hunt_id: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// `{id}` is replaced by the puzzle identifier.
    #[serde(default = "default_sheet_url_template")]
    pub sheet_url_template: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_prefix() -> String {
    "!puzzles".to_string()
}

fn default_sheet_url_template() -> String {
    "https://smallboard.app/puzzles/s/{id}".to_string()
}

fn default_name() -> String {
    "Cardi-P".to_string()
}

fn default_greeting() -> String {
    "Ahoy mateys, puzzle bot here!".to_string()
}

/// Where puzzle records come from.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    Http {
        base_url: String,
        #[serde(default)]
        api_token: Option<String>,
        #[serde(default)]
        api_token_env: Option<String>,
        #[serde(default = "default_http_timeout")]
        timeout_secs: u64,
    },
    /// YAML snapshot, mostly for local runs.
    File { path: String },
}

fn default_http_timeout() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file: default_log_file(),
            console: default_console(),
        }
    }
}

fn default_log_dir() -> String {
    "data".to_string()
}

fn default_log_file() -> String {
    "session.log".to_string()
}

fn default_console() -> bool {
    true
}
