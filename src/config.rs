use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_dataset_path() -> String { "data/colleges.csv".to_string() }
fn default_delimiter() -> char { ',' }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with COLLEGE_MATCH__)
    /// 4. COLLEGE_DATA_PATH for the dataset location
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., COLLEGE_MATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_data_path_override(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("COLLEGE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let a plain COLLEGE_DATA_PATH point the loader at another file
fn apply_data_path_override(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("COLLEGE_DATA_PATH") {
        Ok(path) => Config::builder()
            .add_source(settings)
            .set_override("dataset.path", path)?
            .build(),
        Err(_) => Ok(settings),
    }
}
