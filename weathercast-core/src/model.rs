use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at a point, mirroring the OpenWeatherMap
/// `/data/2.5/weather` response body field-for-field.
///
/// Immutable once deserialized; equality is field equality, which is what the
/// cache round-trip guarantees rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub coord: Coord,
    /// The API calls this array `weather`; it usually holds one entry.
    #[serde(rename = "weather")]
    pub conditions: Vec<Condition>,
    pub main: Measurements,
    /// Visibility in meters, capped at 10 km by the API.
    pub visibility: u32,
    pub wind: Wind,
    pub clouds: Clouds,
    /// Observation time (unix seconds on the wire).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    /// City name; deprecated upstream but still populated.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One weather-condition entry (group id, short label, description, icon code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub deg: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

/// One geocoding candidate from `/geo/1.0/direct`.
///
/// Candidates only ever travel in the order the remote service returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub state: Option<String>,
}
