//! The generation loop: synthesize and persist one reading pair per station
//! on a fixed interval, forever.
//!
//! Each cycle runs inside one database transaction. Every station gets its
//! own savepoint so a failed write rolls back that station only; the cycle
//! commit captures whichever stations succeeded. A failing station is
//! recorded as a [`StationWrite::Skipped`] outcome and surfaces only at
//! `debug!` level; the console shows one summary line per successful pair.

use anyhow::Result;
use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::{Acquire, PgPool, Postgres, Transaction};
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use crate::models::{AirQualityReading, WeatherReading};
use crate::synth;
use crate::Config;

// ---

/// Per-station outcome of one cycle. The default policy is to skip failures
/// silently, but the reason is kept so callers and tests can see it.
#[derive(Debug)]
pub enum StationWrite {
    Written {
        weather: WeatherReading,
        air: AirQualityReading,
    },
    Skipped {
        station_id: i32,
        reason: String,
    },
}

/// Drive generation cycles forever.
///
/// Returns only on a cycle-level database error (e.g. lost connection); the
/// caller decides what to do with it.
pub async fn run(pool: &PgPool, cfg: &Config, station_ids: &[i32]) -> Result<()> {
    // ---
    let mut rng = StdRng::from_entropy();
    let mut ticker = interval(Duration::from_secs(cfg.update_interval_secs));

    loop {
        ticker.tick().await;

        let outcomes = run_cycle(pool, station_ids, &mut rng).await?;

        for outcome in &outcomes {
            match outcome {
                StationWrite::Written { weather, air } => {
                    info!("{}", summary_line(weather, air));
                }
                StationWrite::Skipped { station_id, reason } => {
                    debug!("station {} skipped this cycle: {}", station_id, reason);
                }
            }
        }
    }
}

/// Run one generation cycle over the given stations.
///
/// The current local hour feeds the weather time-of-day adjustment. Per-station
/// write failures are caught and reported in the returned outcomes; only a
/// cycle-level failure (begin/commit) is an error.
pub async fn run_cycle<R: Rng>(
    pool: &PgPool,
    station_ids: &[i32],
    rng: &mut R,
) -> Result<Vec<StationWrite>> {
    // ---
    let hour = Local::now().hour();
    let mut tx = pool.begin().await?;
    let mut outcomes = Vec::with_capacity(station_ids.len());

    for &station_id in station_ids {
        let weather = synth::weather_reading(rng, station_id, hour);
        let air = synth::air_quality_reading(rng, station_id);

        match write_station(&mut tx, &weather, &air).await {
            Ok(()) => outcomes.push(StationWrite::Written { weather, air }),
            Err(e) => outcomes.push(StationWrite::Skipped {
                station_id,
                reason: e.to_string(),
            }),
        }
    }

    tx.commit().await?;
    Ok(outcomes)
}

/// Write one station's reading pair inside a savepoint, so a failure rolls
/// back both rows for this station and nothing else.
async fn write_station(
    tx: &mut Transaction<'_, Postgres>,
    weather: &WeatherReading,
    air: &AirQualityReading,
) -> Result<(), sqlx::Error> {
    // ---
    let mut sp = tx.begin().await?;
    insert_weather(&mut sp, weather).await?;
    insert_air_quality(&mut sp, air).await?;
    sp.commit().await?;
    Ok(())
}

async fn insert_weather(
    tx: &mut Transaction<'_, Postgres>,
    reading: &WeatherReading,
) -> Result<(), sqlx::Error> {
    // ---
    sqlx::query(
        r#"
        INSERT INTO weather_data
            (station_id, temperature, humidity, pressure,
             wind_speed, wind_direction, precipitation)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(reading.station_id)
    .bind(reading.temperature)
    .bind(reading.humidity)
    .bind(reading.pressure)
    .bind(reading.wind_speed)
    .bind(&reading.wind_direction)
    .bind(reading.precipitation)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn insert_air_quality(
    tx: &mut Transaction<'_, Postgres>,
    reading: &AirQualityReading,
) -> Result<(), sqlx::Error> {
    // ---
    sqlx::query(
        r#"
        INSERT INTO air_quality
            (station_id, pm25, pm10, no2, so2, o3, co,
             aqi, health_impact, source_type)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(reading.station_id)
    .bind(reading.pm25)
    .bind(reading.pm10)
    .bind(reading.no2)
    .bind(reading.so2)
    .bind(reading.o3)
    .bind(reading.co)
    .bind(reading.aqi)
    .bind(&reading.health_impact)
    .bind(&reading.source_type)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// One-line console summary for a written reading pair. The tracing
/// subscriber supplies the timestamp.
fn summary_line(weather: &WeatherReading, air: &AirQualityReading) -> String {
    // ---
    format!(
        "station {:>3} | {:>5.1}°C | {:>4.1}% | {:>5.1} mmHg | {:>4.1} m/s {:<2} | AQI {:>3}",
        weather.station_id,
        weather.temperature,
        weather.humidity,
        weather.pressure,
        weather.wind_speed,
        weather.wind_direction,
        air.aqi,
    )
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn summary_line_includes_all_fields() {
        // ---
        let mut rng = StdRng::seed_from_u64(5);
        let weather = synth::weather_reading(&mut rng, 12, 14);
        let air = synth::air_quality_reading(&mut rng, 12);

        let line = summary_line(&weather, &air);
        assert!(line.contains("station  12"), "{}", line);
        assert!(line.contains("mmHg"), "{}", line);
        assert!(line.contains("m/s"), "{}", line);
        assert!(line.contains(&format!("AQI {:>3}", air.aqi)), "{}", line);
        assert!(line.contains(&weather.wind_direction), "{}", line);
    }

    #[test]
    fn skipped_outcome_keeps_the_reason() {
        // ---
        let outcome = StationWrite::Skipped {
            station_id: 9,
            reason: "violates foreign key constraint".to_string(),
        };
        match outcome {
            StationWrite::Skipped { station_id, reason } => {
                assert_eq!(station_id, 9);
                assert!(reason.contains("foreign key"));
            }
            StationWrite::Written { .. } => panic!("expected skip"),
        }
    }
}
