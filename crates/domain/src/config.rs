//! Configuration structures
//!
//! Every section carries serde defaults so partial JSON/TOML files load.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHART_MONTHS, DEFAULT_FEED_LIMIT};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// SQLite record store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path(), pool_size: default_pool_size() }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: default_bind_address() }
    }
}

/// Aggregation defaults
///
/// `timezone` is an IANA name; calendar buckets (months, weekdays, "today")
/// are computed in this zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_feed_limit")]
    pub default_feed_limit: usize,
    #[serde(default = "default_chart_months")]
    pub default_chart_months: u32,
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_feed_limit: default_feed_limit(),
            default_chart_months: default_chart_months(),
            seed_sample_data: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_db_path() -> String {
    "straycare.db".to_string()
}

const fn default_pool_size() -> u32 {
    4
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

const fn default_feed_limit() -> usize {
    DEFAULT_FEED_LIMIT
}

const fn default_chart_months() -> u32 {
    DEFAULT_CHART_MONTHS
}

fn default_log_level() -> String {
    "info".to_string()
}
