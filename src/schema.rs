//! Database schema management for `weathergrid-datagen`.
//!
//! Ensures required tables and indexes exist before the generator starts.
//! Applied once on startup from `main.rs`.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the `weather_stations` reference table plus the two append-only
/// reading tables, `weather_data` and `air_quality`. Safe to call on every
/// startup; no-op if objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // Reference table: one row per simulated station, keyed by name
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weather_stations (
            station_id   SERIAL PRIMARY KEY,
            station_name TEXT             NOT NULL UNIQUE,
            location     TEXT             NOT NULL,
            latitude     DOUBLE PRECISION NOT NULL,
            longitude    DOUBLE PRECISION NOT NULL,
            altitude     INTEGER          NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Append-only weather readings, one per station per cycle
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weather_data (
            id             SERIAL PRIMARY KEY,
            station_id     INTEGER          NOT NULL REFERENCES weather_stations (station_id),
            recorded_at    TIMESTAMPTZ      NOT NULL DEFAULT now(),
            temperature    DOUBLE PRECISION NOT NULL,
            humidity       DOUBLE PRECISION NOT NULL,
            pressure       DOUBLE PRECISION NOT NULL,
            wind_speed     DOUBLE PRECISION NOT NULL,
            wind_direction TEXT             NOT NULL,
            precipitation  DOUBLE PRECISION NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Append-only air-quality readings
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS air_quality (
            id            SERIAL PRIMARY KEY,
            station_id    INTEGER          NOT NULL REFERENCES weather_stations (station_id),
            recorded_at   TIMESTAMPTZ      NOT NULL DEFAULT now(),
            pm25          DOUBLE PRECISION NOT NULL,
            pm10          DOUBLE PRECISION NOT NULL,
            no2           DOUBLE PRECISION NOT NULL,
            so2           DOUBLE PRECISION NOT NULL,
            o3            DOUBLE PRECISION NOT NULL,
            co            DOUBLE PRECISION NOT NULL,
            aqi           INTEGER          NOT NULL,
            health_impact TEXT             NOT NULL,
            source_type   TEXT             NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Basic indexes for per-station queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_weather_data_station_id
            ON weather_data (station_id);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_air_quality_station_id
            ON air_quality (station_id);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
