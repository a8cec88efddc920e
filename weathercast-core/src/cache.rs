use crate::{error::WeatherError, model::Weather, store::KeyValueStore};

/// Fixed key of the single cache slot.
pub const KEY_WEATHER: &str = "KEY_WEATHER";

/// Single-slot persistent cache for the last fetched weather.
///
/// The cache is the sole reader/writer of its slot. There is no TTL and no
/// eviction: the slot lives until the next successful fetch overwrites it.
pub struct WeatherCache {
    store: Box<dyn KeyValueStore>,
}

impl WeatherCache {
    /// The storage handle is injected here; the cache never reaches into
    /// process-global state to find it.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize `weather` and overwrite the slot wholesale.
    pub fn put(&self, weather: &Weather) -> Result<(), WeatherError> {
        let json = serde_json::to_string(weather)?;
        self.store.put(KEY_WEATHER, &json)
    }

    /// Read the slot: `Ok(None)` when empty, `Decode` when the stored text no
    /// longer parses against the current schema. A partial record is never
    /// returned, and a corrupt slot is deliberately not reported as absent.
    pub fn get(&self) -> Result<Option<Weather>, WeatherError> {
        match self.store.get(KEY_WEATHER)? {
            None => Ok(None),
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        }
    }
}
