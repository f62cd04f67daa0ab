//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `STRAYCARE_DB_PATH` is set, configuration comes from the environment
//! 2. Otherwise the standard locations are probed for a config file
//! 3. With neither, built-in defaults apply
//! 4. The result is validated (time zone name, database path)
//!
//! ## Environment Variables
//! - `STRAYCARE_DB_PATH`: Database file path (required for env loading)
//! - `STRAYCARE_DB_POOL_SIZE`: Connection pool size
//! - `STRAYCARE_BIND_ADDRESS`: HTTP listen address
//! - `STRAYCARE_TIMEZONE`: IANA zone for calendar buckets
//! - `STRAYCARE_FEED_LIMIT`: Default activity feed size
//! - `STRAYCARE_CHART_MONTHS`: Default monthly chart length
//! - `STRAYCARE_SEED_SAMPLE_DATA`: Seed an empty database (true/false)
//! - `STRAYCARE_LOG_LEVEL`: Fallback log filter when `RUST_LOG` is unset
//! - `STRAYCARE_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./straycare.json` or `./straycare.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use straycare_domain::{
    Config, DashboardConfig, DatabaseConfig, LoggingConfig, Result, ServerConfig, StrayCareError,
};

const DB_PATH_VAR: &str = "STRAYCARE_DB_PATH";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `StrayCareError::Config` if a source is present but invalid, or
/// if the resulting configuration fails [`validate`].
pub fn load() -> Result<Config> {
    let config = if std::env::var_os(DB_PATH_VAR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        config
    } else {
        match probe_config_paths() {
            Some(path) => load_from_file(Some(path))?,
            None => {
                tracing::warn!("No configuration source found, using defaults");
                Config::default()
            }
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `STRAYCARE_DB_PATH` is required; every other variable falls back to its
/// default when unset.
///
/// # Errors
/// Returns `StrayCareError::Config` if the path is missing or a value does
/// not parse.
pub fn load_from_env() -> Result<Config> {
    let database = DatabaseConfig {
        path: env_var(DB_PATH_VAR)?,
        pool_size: env_parse("STRAYCARE_DB_POOL_SIZE", DatabaseConfig::default().pool_size)?,
    };

    let server = ServerConfig {
        bind_address: std::env::var("STRAYCARE_BIND_ADDRESS")
            .unwrap_or_else(|_| ServerConfig::default().bind_address),
    };

    let defaults = DashboardConfig::default();
    let dashboard = DashboardConfig {
        timezone: std::env::var("STRAYCARE_TIMEZONE").unwrap_or(defaults.timezone),
        default_feed_limit: env_parse("STRAYCARE_FEED_LIMIT", defaults.default_feed_limit)?,
        default_chart_months: env_parse("STRAYCARE_CHART_MONTHS", defaults.default_chart_months)?,
        seed_sample_data: env_bool("STRAYCARE_SEED_SAMPLE_DATA", defaults.seed_sample_data),
    };

    let logging = LoggingConfig {
        level: std::env::var("STRAYCARE_LOG_LEVEL")
            .unwrap_or_else(|_| LoggingConfig::default().level),
        json: env_bool("STRAYCARE_LOG_JSON", false),
    };

    Ok(Config { database, server, dashboard, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `StrayCareError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StrayCareError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StrayCareError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StrayCareError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| StrayCareError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| StrayCareError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(StrayCareError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Check values that serde cannot.
///
/// # Errors
/// Returns `StrayCareError::Config` for an empty database path or an
/// unknown time zone.
pub fn validate(config: &Config) -> Result<()> {
    if config.database.path.trim().is_empty() {
        return Err(StrayCareError::Config("Database path must not be empty".to_string()));
    }
    parse_timezone(&config.dashboard.timezone)?;
    Ok(())
}

/// Resolve an IANA time zone name such as `Asia/Kolkata`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| StrayCareError::Config(format!("Unknown time zone: {}", name)))
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("straycare.json"),
            cwd.join("straycare.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("straycare.json"),
                exe_dir.join("straycare.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        StrayCareError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| StrayCareError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
