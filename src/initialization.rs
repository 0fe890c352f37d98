use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};
use crate::manager_forecast::{Forecast, ForecastError};
use crate::manager_mock::MockForecast;

pub struct Mgr {
    pub forecast: Forecast,
    pub mock: MockForecast,
}

/// Initializes and returns configuration and a Mgr struct holding the initialized managers
///
pub fn init() -> Result<(Config, Mgr), InitializationError> {
    // Load configuration
    let config = load_config()?;

    // Setup logging
    let _ = setup_logger(config.general.log_path.as_deref(), config.general.log_level, config.general.log_to_console)?;

    // Print version
    info!("starting tomorrow weather version: {}", env!("CARGO_PKG_VERSION"));

    // Instantiate structs
    let forecast = Forecast::new(&config.weather_api)?;
    let mock = MockForecast::new();

    let mgr = Mgr {
        forecast,
        mock,
    };

    Ok((config, mgr))
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
    #[error("ClientError: {0}")]
    ClientError(#[from] ForecastError),
}
