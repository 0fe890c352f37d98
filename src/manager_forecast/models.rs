use serde::Deserialize;
use crate::models::ForecastDay;

#[derive(Deserialize)]
pub struct ForecastDays {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Deserialize)]
pub struct ForecastResponse {
    pub forecast: ForecastDays,
}
