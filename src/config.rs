use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// The configuration document compiled into the binary
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize)]
pub struct WeatherApi {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Deserialize)]
pub struct General {
    #[serde(default)]
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_console: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub cities: Vec<String>,
    pub weather_api: WeatherApi,
    pub general: General,
}

/// Loads the static configuration that is embedded in the binary
///
pub fn load_config() -> Result<Config, LoadConfigurationError> {
    parse_config(EMBEDDED_CONFIG)
}

/// Parses a configuration document and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)
        .map_err(|e| LoadConfigurationError::ParseError(e.to_string()))?;

    if config.cities.iter().any(|c| c.trim().is_empty()) {
        return Err(LoadConfigurationError::EmptyCityError);
    }

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ParseError: {0}")]
    ParseError(String),
    #[error("EmptyCityError: city names must not be empty")]
    EmptyCityError,
}
