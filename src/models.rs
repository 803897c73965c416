//! Data models for the telemetry generator.

use serde::Serialize;

// ---

/// A catalog entry: a named place a simulated station can be sited at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    // ---
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
}

impl Location {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64, altitude: i32) -> Self {
        // ---
        Self {
            name,
            latitude,
            longitude,
            altitude,
        }
    }
}

/// A persisted measurement station, as stored in `weather_stations`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Station {
    // ---
    pub station_id: i32,
    pub station_name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: i32,
}

/// One synthesized weather observation for a station.
///
/// All float fields are rounded to one decimal place at synthesis time, so a
/// value read back from `weather_data` compares equal field-for-field.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WeatherReading {
    // ---
    pub station_id: i32,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub precipitation: f64,
}

/// One synthesized air-quality observation for a station.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AirQualityReading {
    // ---
    pub station_id: i32,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub so2: f64,
    pub o3: f64,
    pub co: f64,
    pub aqi: i32,
    pub health_impact: String,
    pub source_type: String,
}
