//! Core library for the `weathercast` client.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Remote OpenWeatherMap clients (current weather, geocoding)
//! - A single-slot persistent weather cache over a key-value store
//! - The repository composing "fetch now, remember only the latest"
//!
//! It is used by `weathercast-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod repository;
pub mod store;

pub use cache::{KEY_WEATHER, WeatherCache};
pub use config::Config;
pub use error::WeatherError;
pub use model::{Location, Weather};
pub use remote::{OpenWeatherClient, RemoteWeatherApi, ROOT_URL};
pub use repository::WeatherRepository;
pub use store::{KeyValueStore, MemoryStore, PrefsStore};

#[cfg(test)]
pub(crate) mod testutil;
