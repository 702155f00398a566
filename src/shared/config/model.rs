use chrono_tz::Tz;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub query: QueryConfig,
    pub time: TimeConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size applied when the caller does not pass one
    pub default_page_size: u64,
    /// Hard upper bound on a requested page size
    pub max_page_size: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 15,
            max_page_size: 500,
        }
    }
}

/// Time zone used for calendar bucketing (year/month boundaries)
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TimeConfig {
    /// IANA zone name (None = UTC)
    pub timezone: Option<String>,
}

impl TimeConfig {
    pub fn zone(&self) -> Tz {
        self.timezone
            .as_ref()
            .and_then(|name| name.parse().ok())
            .unwrap_or(Tz::UTC)
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("ORDERLENS_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
