mod models;

use log::{error, info};
use reqwest::blocking::Client;
use thiserror::Error;
use crate::config::WeatherApi;
use crate::models::ForecastSet;
use crate::manager_forecast::models::ForecastResponse;

/// Anything that can deliver a multi-day forecast for a city
pub trait ForecastSource {
    /// Retrieves a forecast for the given city
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city
    /// * 'days' - number of days to forecast, starting with today
    fn fetch(&self, city: &str, days: u8) -> Result<ForecastSet, ForecastError>;
}

/// Struct for fetching weather forecasts from the remote weather API
pub struct Forecast {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Forecast {
    /// Returns a forecast struct ready for fetching weather forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - weather API configuration to use
    pub fn new(config: &WeatherApi) -> Result<Forecast, ForecastError> {
        let client = Client::builder()
            .build()?;

        Ok(Forecast {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

impl ForecastSource for Forecast {
    fn fetch(&self, city: &str, days: u8) -> Result<ForecastSet, ForecastError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = days.to_string();

        let response = self.client
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("days", days.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let code = status.as_u16();
            let message = status.canonical_reason().unwrap_or_default().to_string();
            error!("API Error for {}: {} {}", city, code, message);

            return Err(ForecastError::ApiError { code, message });
        }

        let json = response.text()?;
        let forecast_response: ForecastResponse = serde_json::from_str(&json)?;

        info!("forecast for {} received with {} days", city, forecast_response.forecast.forecastday.len());

        Ok(ForecastSet { days: forecast_response.forecast.forecastday })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("TransportError: {0}")]
    TransportError(String),
    #[error("ApiError: {code} {message}")]
    ApiError { code: u16, message: String },
    #[error("DecodeError: {0}")]
    DecodeError(String),
}

impl From<reqwest::Error> for ForecastError {
    fn from(e: reqwest::Error) -> Self {
        ForecastError::TransportError(e.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(e: serde_json::Error) -> Self {
        ForecastError::DecodeError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockito::{Matcher, Server};
    use super::*;

    const BODY: &str = r#"{
        "location": {"name": "Chisinau", "country": "Moldova"},
        "forecast": {
            "forecastday": [
                {
                    "date": "2026-10-18",
                    "day": {"maxtemp_c": 18.4, "mintemp_c": 7.1, "avghumidity": 71, "maxwind_kph": 11.2},
                    "hour": [{"time": "2026-10-18 00:00", "wind_dir": "W", "temp_c": 8.0}]
                },
                {
                    "date": "2026-10-19",
                    "day": {"maxtemp_c": 22.0, "mintemp_c": 10.0, "avghumidity": 65, "maxwind_kph": 15.3},
                    "hour": []
                }
            ]
        }
    }"#;

    fn forecast_for(base_url: String) -> Forecast {
        Forecast::new(&WeatherApi { base_url, api_key: "secret".to_string() }).unwrap()
    }

    #[test]
    fn fetch_decodes_forecast() {
        let mut server = Server::new();
        let mock = server.mock("GET", "/v1/forecast.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "secret".into()),
                Matcher::UrlEncoded("q".into(), "Chisinau".into()),
                Matcher::UrlEncoded("days".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create();

        let set = forecast_for(format!("{}/v1/", server.url())).fetch("Chisinau", 2).unwrap();

        mock.assert();
        assert_eq!(set.days.len(), 2);
        assert_eq!(set.days[1].date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(set.days[1].day.max_wind_kph, 15.3);
        assert_eq!(set.days[0].hour.as_ref().unwrap()[0].wind_dir, "W");
    }

    #[test]
    fn fetch_reports_api_error() {
        let mut server = Server::new();
        let _mock = server.mock("GET", "/v1/forecast.json")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":{"code":2006,"message":"API key is invalid."}}"#)
            .create();

        let result = forecast_for(format!("{}/v1/", server.url())).fetch("Madrid", 2);

        assert_eq!(result, Err(ForecastError::ApiError { code: 401, message: "Unauthorized".to_string() }));
    }

    #[test]
    fn fetch_reports_decode_error() {
        let mut server = Server::new();
        let _mock = server.mock("GET", "/v1/forecast.json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"forecast": {"days": []}}"#)
            .create();

        let result = forecast_for(format!("{}/v1/", server.url())).fetch("Kyiv", 2);

        assert!(matches!(result, Err(ForecastError::DecodeError(_))));
    }

    #[test]
    fn fetch_reports_transport_error() {
        let result = forecast_for("http://127.0.0.1:1/v1/".to_string()).fetch("Amsterdam", 2);

        assert!(matches!(result, Err(ForecastError::TransportError(_))));
    }
}
