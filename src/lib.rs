//! Synthetic weather and air-quality telemetry generator.
//!
//! Library surface for the `weathergrid-datagen` binary: the static station
//! catalog, the idempotent station initializer, the pure reading
//! synthesizers, schema bootstrap, and the generation loop. The binary in
//! `main.rs` wires these together; the integration tests drive them against
//! a live database.

pub mod catalog;
pub mod config;
pub mod generator;
pub mod models;
pub mod schema;
pub mod stations;
pub mod synth;

pub use config::Config;
pub use generator::StationWrite;
pub use models::{AirQualityReading, Station, WeatherReading};
