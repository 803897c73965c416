//! Configuration loader for the `weathergrid-datagen` generator.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.

use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u64 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// PostgreSQL connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// Number of stations to initialize at startup.
    pub station_count: usize,

    /// Seconds between generation cycles.
    pub update_interval_secs: u64,

    /// Seconds to wait before the first connection attempt, so a co-started
    /// database container has time to come up.
    pub startup_delay_secs: u64,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DATABASE_URL` – PostgreSQL connection string
///
/// Optional:
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `STATION_COUNT` – stations to initialize (default: 15)
/// - `UPDATE_INTERVAL_SECS` – seconds between cycles (default: 60)
/// - `STARTUP_DELAY_SECS` – wait before connecting (default: 10)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = require_env!("DATABASE_URL");
    let db_pool_max = parse_env_u64!("DB_POOL_MAX", 5) as u32;
    let station_count = parse_env_u64!("STATION_COUNT", 15) as usize;
    let update_interval_secs = parse_env_u64!("UPDATE_INTERVAL_SECS", 60);
    let startup_delay_secs = parse_env_u64!("STARTUP_DELAY_SECS", 10);

    Ok(Config {
        db_url,
        db_pool_max,
        station_count,
        update_interval_secs,
        startup_delay_secs,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks sensitive information like database passwords while showing
    /// all configuration values that were loaded.
    pub fn log_config(&self) {
        // ---
        // Mask the password in the database URL for security
        let masked_db_url = if let Some(at_pos) = self.db_url.rfind('@') {
            if let Some(colon_pos) = self.db_url[..at_pos].rfind(':') {
                format!(
                    "{}:****{}",
                    &self.db_url[..colon_pos],
                    &self.db_url[at_pos..]
                )
            } else {
                self.db_url.clone()
            }
        } else {
            self.db_url.clone()
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL         : {}", masked_db_url);
        tracing::info!("  DB_POOL_MAX          : {}", self.db_pool_max);
        tracing::info!("  STATION_COUNT        : {}", self.station_count);
        tracing::info!("  UPDATE_INTERVAL_SECS : {}", self.update_interval_secs);
        tracing::info!("  STARTUP_DELAY_SECS   : {}", self.startup_delay_secs);
    }
}
