//! Station initializer: lookup-or-create the simulated station population.
//!
//! Runs once at startup. Samples a configured number of cities from the
//! static catalog, synthesizes a display name per station, and ensures a row
//! exists in `weather_stations` for each name, reusing ids on collision. All
//! work happens inside a single transaction; a failure here is a startup
//! precondition violation and propagates fatally.
//!
//! Station names are re-randomized on every process start, so the name-based
//! dedup only holds within one run (or across runs replaying the same RNG
//! seed). Repeated starts with fresh entropy will keep minting new stations
//! for the same cities; the integration tests document this behavior.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::catalog::{CITIES, STATION_PREFIXES, STATION_SUFFIXES};
use crate::models::Location;

// ---

/// Synthesize a station display name for a city, e.g.
/// `"Observation Post Tomsk No. 2"`.
pub fn station_name<R: Rng>(rng: &mut R, city_name: &str) -> String {
    // ---
    let prefix = STATION_PREFIXES.choose(rng).copied().unwrap_or("Weather Station");
    let suffix = STATION_SUFFIXES.choose(rng).copied().unwrap_or("");
    format!("{prefix} {city_name}{suffix}")
}

/// Ensure `count` station rows exist and return their ids in selection order.
///
/// Selects `min(count, catalog size)` distinct cities uniformly without
/// replacement, then looks each synthesized name up by exact match and
/// inserts a new row only when the name is unknown. The whole batch commits
/// as one transaction before this returns.
pub async fn initialize_stations<R: Rng>(
    pool: &PgPool,
    count: usize,
    rng: &mut R,
) -> Result<Vec<i32>> {
    // ---
    let selected: Vec<&Location> = CITIES
        .choose_multiple(rng, count.min(CITIES.len()))
        .collect();

    let mut tx = pool.begin().await?;
    let mut station_ids = Vec::with_capacity(selected.len());

    for city in selected {
        let name = station_name(rng, city.name);

        let existing: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT station_id FROM weather_stations WHERE station_name = $1
            "#,
        )
        .bind(&name)
        .fetch_optional(&mut *tx)
        .await?;

        let station_id = match existing {
            Some(id) => id,
            None => {
                sqlx::query_scalar(
                    r#"
                    INSERT INTO weather_stations
                        (station_name, location, latitude, longitude, altitude)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING station_id
                    "#,
                )
                .bind(&name)
                .bind(format!("City of {}", city.name))
                .bind(city.latitude)
                .bind(city.longitude)
                .bind(city.altitude)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        station_ids.push(station_id);
    }

    tx.commit().await?;

    info!("Initialized {} stations: {:?}", station_ids.len(), station_ids);
    Ok(station_ids)
}
