use crate::{
    cache::WeatherCache,
    error::WeatherError,
    model::{Location, Weather},
    remote::RemoteWeatherApi,
};

/// Fetch-then-cache composition: "fetch now, remember only the latest".
///
/// Concurrent fetches are independent; if two complete out of order the slot
/// holds whichever wrote last.
pub struct WeatherRepository {
    remote: Box<dyn RemoteWeatherApi>,
    cache: WeatherCache,
}

impl WeatherRepository {
    pub fn new(remote: Box<dyn RemoteWeatherApi>, cache: WeatherCache) -> Self {
        Self { remote, cache }
    }

    /// Fetch current weather and cache it as a side effect.
    ///
    /// A cache-write failure is logged and swallowed: the caller still gets
    /// the freshly fetched record. A remote failure propagates unchanged and
    /// leaves the cache untouched.
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<Weather, WeatherError> {
        let weather = self.remote.current_weather(lat, lon).await?;

        if let Err(err) = self.cache.put(&weather) {
            tracing::warn!(error = %err, "failed to cache fetched weather");
        }

        Ok(weather)
    }

    /// Whatever the cache currently holds; never touches the network.
    /// A corrupt slot propagates as `Decode` rather than masking as absent.
    pub fn stored_weather(&self) -> Result<Option<Weather>, WeatherError> {
        self.cache.get()
    }

    /// Geocoding candidates for a place name, in remote order.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        self.remote.search_locations(query).await
    }
}
