//! Static station catalog for the `weathergrid-datagen` generator.
//!
//! The catalog is a fixed reference list of cities (name, coordinates,
//! altitude) that the station initializer samples from at startup, together
//! with the label fragments used to synthesize station names. Pure data,
//! compiled in; nothing here touches the database.

use crate::models::Location;

// ---

/// Label words prepended to a city name when synthesizing a station name.
pub const STATION_PREFIXES: [&str; 5] = [
    "Weather Station",
    "Observation Post",
    "Monitoring Post",
    "Climate Center",
    "AWS",
];

/// Suffixes appended to a synthesized station name. The empty suffix is
/// deliberate: most stations carry no numbering.
pub const STATION_SUFFIXES: [&str; 4] = ["", " No. 1", " No. 2", " Central"];

/// Reference cities the initializer selects stations from.
pub const CITIES: [Location; 30] = [
    Location::new("Moscow", 55.7558, 37.6173, 156),
    Location::new("Saint Petersburg", 59.9343, 30.3351, 3),
    Location::new("Novosibirsk", 55.0084, 82.9357, 150),
    Location::new("Yekaterinburg", 56.8389, 60.6057, 270),
    Location::new("Nizhny Novgorod", 56.3269, 44.0065, 200),
    Location::new("Kazan", 55.7961, 49.1064, 116),
    Location::new("Chelyabinsk", 55.1644, 61.4368, 220),
    Location::new("Omsk", 54.9914, 73.3715, 90),
    Location::new("Samara", 53.1959, 50.1002, 135),
    Location::new("Rostov-on-Don", 47.2224, 39.7189, 70),
    Location::new("Ufa", 54.7355, 55.9917, 160),
    Location::new("Krasnoyarsk", 56.0153, 92.8932, 140),
    Location::new("Voronezh", 51.6720, 39.1843, 154),
    Location::new("Perm", 58.0105, 56.2294, 171),
    Location::new("Volgograd", 48.7194, 44.5018, 80),
    Location::new("Krasnodar", 45.0355, 38.9753, 25),
    Location::new("Saratov", 51.5336, 46.0086, 50),
    Location::new("Tyumen", 57.1530, 65.5343, 102),
    Location::new("Tolyatti", 53.5078, 49.4204, 90),
    Location::new("Izhevsk", 56.8528, 53.2115, 158),
    Location::new("Barnaul", 53.3478, 83.7756, 180),
    Location::new("Ulyanovsk", 54.3167, 48.3667, 150),
    Location::new("Irkutsk", 52.2864, 104.2810, 440),
    Location::new("Khabarovsk", 48.4802, 135.0719, 72),
    Location::new("Yaroslavl", 57.6266, 39.8938, 100),
    Location::new("Vladivostok", 43.1155, 131.8855, 40),
    Location::new("Makhachkala", 42.9831, 47.5047, 10),
    Location::new("Tomsk", 56.4977, 84.9744, 110),
    Location::new("Kemerovo", 55.3547, 86.0878, 140),
    Location::new("Novokuznetsk", 53.7600, 87.1214, 190),
];
