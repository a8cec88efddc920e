//! Shared fixtures for the in-crate test modules.

use chrono::{TimeZone, Utc};

use crate::model::{Clouds, Condition, Coord, Measurements, Weather, Wind};

/// A fully populated record with the temperature and description under test.
pub fn sample_weather(temp: f64, description: &str) -> Weather {
    Weather {
        coord: Coord {
            lat: 40.7,
            lon: -74.0,
        },
        conditions: vec![Condition {
            id: 800,
            main: "Clear".to_string(),
            description: description.to_string(),
            icon: "01d".to_string(),
        }],
        main: Measurements {
            temp,
            feels_like: temp - 1.5,
            temp_min: temp - 4.0,
            temp_max: temp + 3.0,
            pressure: 1012,
            humidity: 48,
        },
        visibility: 10_000,
        wind: Wind { speed: 5.3, deg: 220 },
        clouds: Clouds { all: 0 },
        dt: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        name: "New York".to_string(),
    }
}

/// The same record as the JSON body a stub server would return.
pub fn sample_weather_json(temp: f64, description: &str) -> serde_json::Value {
    serde_json::to_value(sample_weather(temp, description)).expect("sample weather serializes")
}
