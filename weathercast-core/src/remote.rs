use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{Location, Weather},
};

/// Production OpenWeatherMap endpoint root.
pub const ROOT_URL: &str = "https://api.openweathermap.org";

const WEATHER_PATH: &str = "/data/2.5/weather";
const GEOCODING_PATH: &str = "/geo/1.0/direct";

/// Unit system bound into every current-weather request.
const UNITS: &str = "imperial";
/// Result ceiling bound into every geocoding request.
const GEOCODING_LIMIT: &str = "10";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The remote boundary: one stateless request/response function per endpoint.
///
/// No retries live behind this trait; callers see exactly one outcome per call.
#[async_trait]
pub trait RemoteWeatherApi: Send + Sync {
    /// Current conditions at a coordinate.
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<Weather, WeatherError>;

    /// Geocoding candidates for a free-text place name, in remote order,
    /// possibly empty.
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, ROOT_URL)
    }

    /// Point the client at a different endpoint root, e.g. a stub server in tests.
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// GET `{base_url}{path}?{query}` and parse the JSON body.
    ///
    /// The body is read as text before the status check so that a non-success
    /// response surfaces as `Remote` with a body snippet, never as `Decode`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "sending OpenWeatherMap request");

        let res = self.http.get(&url).query(query).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::remote(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RemoteWeatherApi for OpenWeatherClient {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<Weather, WeatherError> {
        let lat = lat.to_string();
        let lon = lon.to_string();

        self.get_json(
            WEATHER_PATH,
            &[
                ("units", UNITS),
                ("appid", self.api_key.as_str()),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
            ],
        )
        .await
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError> {
        self.get_json(
            GEOCODING_PATH,
            &[
                ("limit", GEOCODING_LIMIT),
                ("appid", self.api_key.as_str()),
                ("q", query),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_weather_json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_against(server: &MockServer) -> OpenWeatherClient {
        OpenWeatherClient::with_base_url("TEST_KEY".to_string(), &server.uri())
            .expect("client must build")
    }

    #[tokio::test]
    async fn current_weather_parses_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("units", "imperial"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("lat", "40.7"))
            .and(query_param("lon", "-74"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_json(72.0, "clear")))
            .mount(&server)
            .await;

        let client = client_against(&server).await;
        let weather = client.current_weather(40.7, -74.0).await.expect("fetch");

        assert_eq!(weather.main.temp, 72.0);
        assert_eq!(weather.conditions[0].description, "clear");
    }

    #[tokio::test]
    async fn current_weather_maps_unauthorized_to_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "cod": 401,
                "message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let client = client_against(&server).await;
        let err = client.current_weather(40.7, -74.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::Remote { status: 401, .. }));
    }

    #[tokio::test]
    async fn current_weather_maps_malformed_body_to_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let client = client_against(&server).await;
        let err = client.current_weather(40.7, -74.0).await.unwrap_err();

        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[tokio::test]
    async fn search_locations_preserves_remote_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("limit", "10"))
            .and(query_param("appid", "TEST_KEY"))
            .and(query_param("q", "Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Paris", "lat": 48.8589, "lon": 2.32, "country": "FR", "state": "Ile-de-France"},
                {"name": "Paris", "lat": 33.6617, "lon": -95.5555, "country": "US", "state": "Texas"}
            ])))
            .mount(&server)
            .await;

        let client = client_against(&server).await;
        let locations = client.search_locations("Paris").await.expect("search");

        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].country, "FR");
        assert_eq!(locations[1].country, "US");
        assert_eq!(locations[1].state.as_deref(), Some("Texas"));
    }

    #[tokio::test]
    async fn search_locations_accepts_empty_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let client = client_against(&server).await;
        let locations = client.search_locations("Nowhereville").await.expect("search");

        assert!(locations.is_empty());
    }
}
