//! Application entry point for the `weathergrid-datagen` generator.
//!
//! This binary orchestrates the full startup sequence for the synthetic
//! telemetry generator, including:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Establishing a PostgreSQL connection pool (after an optional delay so a
//!   co-started database container can come up)
//! - Creating the database schema if it does not exist
//! - Initializing the simulated station population via `stations`
//! - Running the infinite generation loop via `generator`
//!
//! # Environment Variables
//! - `DATABASE_URL` (**required**) – PostgreSQL connection string
//! - `DB_POOL_MAX` (optional) – maximum number of DB connections (default: 5)
//! - `STATION_COUNT` (optional) – stations to initialize (default: 15)
//! - `UPDATE_INTERVAL_SECS` (optional) – seconds between cycles (default: 60)
//! - `STARTUP_DELAY_SECS` (optional) – wait before connecting (default: 10)
//! - `GEN_LOG_LEVEL` (optional) – log verbosity (default: `info`)
//! - `GEN_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! Startup failures (unreachable store, bad configuration) propagate with
//! diagnostics. Once the loop is running, an error escaping it ends the
//! process silently after the pool is closed.

use std::{env, io::IsTerminal};

use dotenvy::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use anyhow::Result;

use weathergrid_datagen::{config, generator, schema, stations};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    if cfg.startup_delay_secs > 0 {
        tracing::info!(
            "Waiting {}s for the database to come up",
            cfg.startup_delay_secs
        );
        tokio::time::sleep(tokio::time::Duration::from_secs(cfg.startup_delay_secs)).await;
    }

    tracing::info!("Attempting to connect to database: {}", cfg.db_url);

    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_pool_max)
        .connect(&cfg.db_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database '{}': {}", cfg.db_url, e))?;

    tracing::info!("Successfully connected to database");

    schema::create_schema(&pool).await?;

    let mut rng = StdRng::from_entropy();
    let station_ids = stations::initialize_stations(&pool, cfg.station_count, &mut rng).await?;

    // Errors past this point (e.g. a lost connection mid-loop) end the
    // process silently; the store connection is still released.
    let _ = generator::run(&pool, &cfg, &station_ids).await;
    pool.close().await;

    Ok(())
}

// ---

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `GEN_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by the `GEN_LOG_LEVEL` env var
///
/// This should be called once at application startup before any logging
/// or tracing macros are invoked. It installs the subscriber globally
/// for the lifetime of the process.
fn init_tracing() {
    // ---
    let span_events = match env::var("GEN_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    // Determine if we should use colors
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to GEN_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("GEN_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "info",
        };
        EnvFilter::new(format!("{level},sqlx::query=warn"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
