//! Reading synthesizers: randomized, rule-based weather and air-quality
//! generation.
//!
//! Everything here is pure computation over a caller-supplied [`Rng`] — no
//! I/O, no clock access. The binary passes the current local hour in from the
//! generation loop; tests pass a seeded `StdRng` and fixed hours to pin the
//! bucket and tier boundaries down.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{AirQualityReading, WeatherReading};

// ---

/// The eight compass points a wind direction is drawn from.
pub const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Pollution source labels joined into `source_type`.
pub const POLLUTION_SOURCES: [&str; 4] = ["transport", "industry", "heating", "construction"];

/// Round to one decimal place; every float field in a reading goes through
/// this before it is stored.
fn round1(value: f64) -> f64 {
    // ---
    (value * 10.0).round() / 10.0
}

// ---

/// Synthesize one weather reading for a station.
///
/// `hour` is the local hour-of-day (0–23) and selects the additive
/// temperature adjustment; the remaining fields are derived from the adjusted
/// temperature and an independent pressure draw as described on each helper.
pub fn weather_reading<R: Rng>(rng: &mut R, station_id: i32, hour: u32) -> WeatherReading {
    // ---
    // Winter baseline, shifted by time of day.
    let base_temp = rng.gen_range(-25.0..=3.0);
    let temperature = round1(base_temp + temp_adjust(hour));

    let (lo, hi) = humidity_bounds(temperature);
    let humidity = round1(rng.gen_range(lo..=hi));

    let pressure = round1(rng.gen_range(730.0..=780.0));

    let (lo, hi) = wind_speed_bounds(pressure);
    let wind_speed = round1(rng.gen_range(lo..=hi));

    let wind_direction = WIND_DIRECTIONS
        .choose(rng)
        .copied()
        .unwrap_or("N")
        .to_string();

    let precipitation = precipitation(rng, temperature);

    WeatherReading {
        station_id,
        temperature,
        humidity,
        pressure,
        wind_speed,
        wind_direction,
        precipitation,
    }
}

/// Additive temperature adjustment per time-of-day bucket: coldest at night,
/// mildest in the afternoon.
pub fn temp_adjust(hour: u32) -> f64 {
    // ---
    match hour {
        0..=5 => -8.0,
        6..=11 => -4.0,
        12..=17 => 2.0,
        _ => -6.0,
    }
}

/// Humidity range in percent for a given (already adjusted) temperature.
pub fn humidity_bounds(temperature: f64) -> (f64, f64) {
    // ---
    if temperature < -20.0 {
        (50.0, 75.0)
    } else if temperature < -10.0 {
        (65.0, 80.0)
    } else {
        (70.0, 85.0)
    }
}

/// Wind speed range in m/s for a given pressure: low pressure brings wind.
pub fn wind_speed_bounds(pressure: f64) -> (f64, f64) {
    // ---
    if pressure < 740.0 {
        (3.0, 12.0)
    } else if pressure > 770.0 {
        (1.0, 5.0)
    } else {
        (2.0, 8.0)
    }
}

/// Precipitation in mm: zero 70% of the time, otherwise an amount whose range
/// depends on the temperature sign (snow below zero, sleet at exactly zero,
/// rain above).
fn precipitation<R: Rng>(rng: &mut R, temperature: f64) -> f64 {
    // ---
    if rng.gen::<f64>() >= 0.3 {
        return 0.0;
    }
    let amount = if temperature < 0.0 {
        rng.gen_range(0.5..=3.0)
    } else if temperature == 0.0 {
        rng.gen_range(0.1..=2.0)
    } else {
        rng.gen_range(0.1..=5.0)
    };
    round1(amount)
}

// ---

/// Pollution severity drawn per reading; each level maps to its own uniform
/// range per pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollutionLevel {
    Low,
    Medium,
    High,
}

impl PollutionLevel {
    const ALL: [PollutionLevel; 3] = [
        PollutionLevel::Low,
        PollutionLevel::Medium,
        PollutionLevel::High,
    ];

    /// Uniform draw bounds as (pm25, pm10, no2, so2, co) range pairs.
    pub fn pollutant_bounds(self) -> [(f64, f64); 5] {
        // ---
        match self {
            PollutionLevel::Low => [
                (5.0, 20.0),
                (10.0, 30.0),
                (5.0, 15.0),
                (1.0, 8.0),
                (0.1, 0.5),
            ],
            PollutionLevel::Medium => [
                (15.0, 35.0),
                (25.0, 50.0),
                (15.0, 30.0),
                (5.0, 12.0),
                (0.3, 1.0),
            ],
            PollutionLevel::High => [
                (30.0, 60.0),
                (40.0, 80.0),
                (25.0, 45.0),
                (10.0, 20.0),
                (0.8, 2.0),
            ],
        }
    }
}

/// Synthesize one air-quality reading for a station.
pub fn air_quality_reading<R: Rng>(rng: &mut R, station_id: i32) -> AirQualityReading {
    // ---
    let level = PollutionLevel::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PollutionLevel::Low);
    air_quality_at_level(rng, station_id, level)
}

/// Synthesize an air-quality reading at a fixed pollution level. Split out of
/// [`air_quality_reading`] so tests can pin the level and assert per-level
/// pollutant bounds.
pub fn air_quality_at_level<R: Rng>(
    rng: &mut R,
    station_id: i32,
    level: PollutionLevel,
) -> AirQualityReading {
    // ---
    let [pm25_b, pm10_b, no2_b, so2_b, co_b] = level.pollutant_bounds();

    let pm25 = round1(rng.gen_range(pm25_b.0..=pm25_b.1));
    let pm10 = round1(rng.gen_range(pm10_b.0..=pm10_b.1));
    let no2 = round1(rng.gen_range(no2_b.0..=no2_b.1));
    let so2 = round1(rng.gen_range(so2_b.0..=so2_b.1));
    let co = round1(rng.gen_range(co_b.0..=co_b.1));

    // Ozone is level-independent.
    let o3 = round1(rng.gen_range(8.0..=25.0));

    let (aqi, health_impact) = aqi_from_pm25(pm25);

    // 1 to 3 distinct sources, joined for display.
    let count = rng.gen_range(1..=3);
    let source_type = POLLUTION_SOURCES
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    AirQualityReading {
        station_id,
        pm25,
        pm10,
        no2,
        so2,
        o3,
        co,
        aqi,
        health_impact: health_impact.to_string(),
        source_type,
    }
}

/// Piecewise-linear AQI over pm2.5 with four breakpoints, floored to an
/// integer and clamped to 200. Each segment carries a fixed health label.
pub fn aqi_from_pm25(pm25: f64) -> (i32, &'static str) {
    // ---
    let (aqi, label) = if pm25 <= 12.0 {
        ((pm25 / 12.0) * 50.0, "Good")
    } else if pm25 <= 35.4 {
        (50.0 + ((pm25 - 12.1) / 23.3) * 50.0, "Moderate")
    } else if pm25 <= 55.4 {
        (100.0 + ((pm25 - 35.5) / 19.9) * 50.0, "Unhealthy")
    } else {
        (150.0 + ((pm25 - 55.5) / 94.9) * 100.0, "Very Unhealthy")
    };
    ((aqi.floor() as i32).min(200), label)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        // ---
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn temp_adjust_buckets() {
        // ---
        assert_eq!(temp_adjust(0), -8.0);
        assert_eq!(temp_adjust(5), -8.0);
        assert_eq!(temp_adjust(6), -4.0);
        assert_eq!(temp_adjust(11), -4.0);
        assert_eq!(temp_adjust(12), 2.0);
        assert_eq!(temp_adjust(17), 2.0);
        assert_eq!(temp_adjust(18), -6.0);
        assert_eq!(temp_adjust(23), -6.0);
    }

    #[test]
    fn night_bucket_shifts_baseline() {
        // ---
        // base_temp of -10 at hour 3 lands at exactly -18.0.
        assert_eq!(round1(-10.0 + temp_adjust(3)), -18.0);
    }

    #[test]
    fn weather_fields_stay_in_bounds() {
        // ---
        let mut rng = rng();
        for hour in 0..24 {
            for _ in 0..200 {
                let w = weather_reading(&mut rng, 1, hour);

                let adjust = temp_adjust(hour);
                assert!(
                    w.temperature >= -25.0 + adjust && w.temperature <= 3.0 + adjust,
                    "temperature {} out of range for hour {}",
                    w.temperature,
                    hour
                );

                let (lo, hi) = humidity_bounds(w.temperature);
                assert!(w.humidity >= lo && w.humidity <= hi, "humidity {}", w.humidity);

                assert!(w.pressure >= 730.0 && w.pressure <= 780.0);

                let (lo, hi) = wind_speed_bounds(w.pressure);
                assert!(
                    w.wind_speed >= lo && w.wind_speed <= hi,
                    "wind {} at pressure {}",
                    w.wind_speed,
                    w.pressure
                );

                assert!(WIND_DIRECTIONS.contains(&w.wind_direction.as_str()));
            }
        }
    }

    #[test]
    fn precipitation_is_zero_or_tier_bounded() {
        // ---
        let mut rng = rng();
        let mut saw_zero = false;
        let mut saw_nonzero = false;
        for _ in 0..2000 {
            let w = weather_reading(&mut rng, 1, 3);
            if w.precipitation == 0.0 {
                saw_zero = true;
                continue;
            }
            saw_nonzero = true;
            if w.temperature < 0.0 {
                assert!(w.precipitation >= 0.5 && w.precipitation <= 3.0);
            } else if w.temperature == 0.0 {
                assert!(w.precipitation >= 0.1 && w.precipitation <= 2.0);
            } else {
                assert!(w.precipitation >= 0.1 && w.precipitation <= 5.0);
            }
        }
        // With p=0.3 over 2000 draws both outcomes show up.
        assert!(saw_zero && saw_nonzero);
    }

    #[test]
    fn low_pressure_widens_wind_range() {
        // ---
        assert_eq!(wind_speed_bounds(735.0), (3.0, 12.0));
        assert_eq!(wind_speed_bounds(775.0), (1.0, 5.0));
        assert_eq!(wind_speed_bounds(750.0), (2.0, 8.0));
        // Boundary values fall in the middle tier.
        assert_eq!(wind_speed_bounds(740.0), (2.0, 8.0));
        assert_eq!(wind_speed_bounds(770.0), (2.0, 8.0));
    }

    #[test]
    fn humidity_tiers_follow_temperature() {
        // ---
        assert_eq!(humidity_bounds(-25.0), (50.0, 75.0));
        assert_eq!(humidity_bounds(-15.0), (65.0, 80.0));
        assert_eq!(humidity_bounds(-5.0), (70.0, 85.0));
        assert_eq!(humidity_bounds(-20.0), (65.0, 80.0));
        assert_eq!(humidity_bounds(-10.0), (70.0, 85.0));
    }

    #[test]
    fn pollutants_stay_within_level_bounds() {
        // ---
        let mut rng = rng();
        for level in PollutionLevel::ALL {
            let [pm25_b, pm10_b, no2_b, so2_b, co_b] = level.pollutant_bounds();
            for _ in 0..500 {
                let a = air_quality_at_level(&mut rng, 7, level);
                assert!(a.pm25 >= pm25_b.0 && a.pm25 <= pm25_b.1, "{:?}", level);
                assert!(a.pm10 >= pm10_b.0 && a.pm10 <= pm10_b.1, "{:?}", level);
                assert!(a.no2 >= no2_b.0 && a.no2 <= no2_b.1, "{:?}", level);
                assert!(a.so2 >= so2_b.0 && a.so2 <= so2_b.1, "{:?}", level);
                assert!(a.co >= co_b.0 && a.co <= co_b.1, "{:?}", level);
                assert!(a.o3 >= 8.0 && a.o3 <= 25.0);
                assert!(a.aqi >= 0 && a.aqi <= 200);
            }
        }
    }

    #[test]
    fn aqi_breakpoints() {
        // ---
        assert_eq!(aqi_from_pm25(0.0), (0, "Good"));
        assert_eq!(aqi_from_pm25(12.0), (50, "Good"));
        assert_eq!(aqi_from_pm25(35.4), (100, "Moderate"));
        assert_eq!(aqi_from_pm25(55.4), (150, "Unhealthy"));
        // 150 + ((60 - 55.5) / 94.9) * 100 = 154.74..., floored.
        assert_eq!(aqi_from_pm25(60.0), (154, "Very Unhealthy"));
    }

    #[test]
    fn aqi_clamps_at_200() {
        // ---
        let (aqi, label) = aqi_from_pm25(150.0);
        assert_eq!(aqi, 200);
        assert_eq!(label, "Very Unhealthy");
    }

    #[test]
    fn sources_are_one_to_three_unique_members() {
        // ---
        let mut rng = rng();
        for _ in 0..500 {
            let a = air_quality_reading(&mut rng, 3);
            let parts: Vec<&str> = a.source_type.split(", ").collect();
            assert!((1..=3).contains(&parts.len()), "{}", a.source_type);
            for p in &parts {
                assert!(POLLUTION_SOURCES.contains(p), "{}", p);
            }
            let unique: std::collections::HashSet<&&str> = parts.iter().collect();
            assert_eq!(unique.len(), parts.len(), "duplicate source in {}", a.source_type);
        }
    }

    #[test]
    fn readings_are_rounded_to_one_decimal() {
        // ---
        let mut rng = rng();
        for _ in 0..200 {
            let w = weather_reading(&mut rng, 1, 12);
            for v in [w.temperature, w.humidity, w.pressure, w.wind_speed, w.precipitation] {
                assert_eq!(round1(v), v, "not rounded: {}", v);
            }
            let a = air_quality_reading(&mut rng, 1);
            for v in [a.pm25, a.pm10, a.no2, a.so2, a.o3, a.co] {
                assert_eq!(round1(v), v, "not rounded: {}", v);
            }
        }
    }
}
