//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use thiserror::Error;
use voxdesk_agent::VoicePipeline;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Where the agent stores keep their files.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Names the agents introduce themselves with.
    #[serde(default)]
    pub agents: AgentsConfig,

    /// Models handed to the voice framework for every session.
    #[serde(default)]
    pub pipeline: VoicePipeline,

    /// Session lifetime settings.
    #[serde(default)]
    pub sessions: SessionsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP tool host.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Storage locations.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory that receives one JSON file per finalized order.
    #[serde(default = "default_orders_dir")]
    pub orders_dir: PathBuf,

    /// The wellness check-in log file.
    #[serde(default = "default_wellness_log")]
    pub wellness_log: PathBuf,

    /// The fraud case file. Seeded with sample cases if absent.
    #[serde(default = "default_fraud_cases")]
    pub fraud_cases: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    #[serde(default = "default_bank_name")]
    pub bank_name: String,
}

/// Session lifetime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsConfig {
    /// Seconds without a tool call before a session is dropped. 0 disables the sweep.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "voxdesk_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3000
}

fn default_orders_dir() -> PathBuf {
    PathBuf::from("orders")
}

fn default_wellness_log() -> PathBuf {
    PathBuf::from("wellness_log.json")
}

fn default_fraud_cases() -> PathBuf {
    PathBuf::from("fraud_cases.json")
}

fn default_brand_name() -> String {
    "Nebula Coffee Co.".to_string()
}

fn default_bank_name() -> String {
    "Nebula Bank".to_string()
}

fn default_idle_timeout_secs() -> u64 {
    1800
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            orders_dir: default_orders_dir(),
            wellness_log: default_wellness_log(),
            fraud_cases: default_fraud_cases(),
        }
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            bank_name: default_bank_name(),
        }
    }
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VOXDESK_HOST` overrides `server.host`
/// - `VOXDESK_PORT` overrides `server.port`
/// - `VOXDESK_ORDERS_DIR` overrides `storage.orders_dir`
/// - `VOXDESK_WELLNESS_LOG` overrides `storage.wellness_log`
/// - `VOXDESK_FRAUD_CASES` overrides `storage.fraud_cases`
/// - `VOXDESK_BRAND_NAME` overrides `agents.brand_name`
/// - `VOXDESK_BANK_NAME` overrides `agents.bank_name`
/// - `VOXDESK_SESSION_IDLE_TIMEOUT_SECS` overrides `sessions.idle_timeout_secs`
/// - `VOXDESK_LOG_LEVEL` overrides `logging.level`
/// - `VOXDESK_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Applies `VOXDESK_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(host) = lookup("VOXDESK_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Some(port) = lookup("VOXDESK_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Some(dir) = lookup("VOXDESK_ORDERS_DIR") {
        config.storage.orders_dir = PathBuf::from(dir);
    }
    if let Some(path) = lookup("VOXDESK_WELLNESS_LOG") {
        config.storage.wellness_log = PathBuf::from(path);
    }
    if let Some(path) = lookup("VOXDESK_FRAUD_CASES") {
        config.storage.fraud_cases = PathBuf::from(path);
    }
    if let Some(name) = lookup("VOXDESK_BRAND_NAME") {
        config.agents.brand_name = name;
    }
    if let Some(name) = lookup("VOXDESK_BANK_NAME") {
        config.agents.bank_name = name;
    }
    if let Some(secs) = lookup("VOXDESK_SESSION_IDLE_TIMEOUT_SECS") {
        if let Ok(parsed) = secs.parse() {
            config.sessions.idle_timeout_secs = parsed;
        }
    }
    if let Some(level) = lookup("VOXDESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = lookup("VOXDESK_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
}
