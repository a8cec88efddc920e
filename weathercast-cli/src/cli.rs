use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;

use weathercast_core::{
    Config, Location, OpenWeatherClient, PrefsStore, Weather, WeatherCache, WeatherRepository,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercast", version, about = "OpenWeatherMap fetch-and-cache client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Fetch current weather for a coordinate and cache it.
    Current {
        /// Latitude in signed degrees.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in signed degrees.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Show the last fetched weather without touching the network.
    Cached,

    /// Search geocoding candidates for a place name.
    Search {
        /// Free-text place name, e.g. "Paris".
        query: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Current { lat, lon } => {
                let repo = build_repository()?;
                let weather = repo.fetch(lat, lon).await?;
                print_weather(&weather);
                Ok(())
            }
            Command::Cached => {
                let repo = build_repository()?;
                match repo.stored_weather()? {
                    Some(weather) => print_weather(&weather),
                    None => println!("No weather cached yet. Run `weathercast current` first."),
                }
                Ok(())
            }
            Command::Search { query } => {
                let repo = build_repository()?;
                let locations = repo.search_locations(&query).await?;

                if locations.is_empty() {
                    println!("No locations found for '{query}'.");
                } else {
                    for location in &locations {
                        print_location(location);
                    }
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeatherMap API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_repository() -> anyhow::Result<WeatherRepository> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?.to_string();

    let client = OpenWeatherClient::new(api_key)?;
    let store = PrefsStore::new(PrefsStore::default_path()?);
    let cache = WeatherCache::new(Box::new(store));

    Ok(WeatherRepository::new(Box::new(client), cache))
}

fn print_weather(weather: &Weather) {
    let description = weather
        .conditions
        .first()
        .map(|c| c.description.as_str())
        .unwrap_or("unknown conditions");

    println!("{}: {}", weather.name, description);
    println!(
        "  {:.1}°F (feels like {:.1}°F), humidity {}%",
        weather.main.temp, weather.main.feels_like, weather.main.humidity
    );
    println!(
        "  wind {:.1} mph ({}°), clouds {}%",
        weather.wind.speed, weather.wind.deg, weather.clouds.all
    );
    println!("  observed at {}", weather.dt.format("%Y-%m-%d %H:%M UTC"));
}

fn print_location(location: &Location) {
    match &location.state {
        Some(state) => println!(
            "{}, {state}, {}  ({:.4}, {:.4})",
            location.name, location.country, location.lat, location.lon
        ),
        None => println!(
            "{}, {}  ({:.4}, {:.4})",
            location.name, location.country, location.lat, location.lon
        ),
    }
}
