use std::collections::HashMap;
use chrono::NaiveDate;
use serde::Deserialize;

/// Index of the hourly record that represents the day's wind direction (12:00)
pub const NOON_HOUR_INDEX: usize = 12;

/// Daily aggregates for one forecast day
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DayAggregates {
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: f64,
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "avghumidity")]
    pub avg_humidity: f64,
    #[serde(rename = "maxwind_kph")]
    pub max_wind_kph: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HourRecord {
    pub time: String,
    pub wind_dir: String,
}

/// One calendar day of a forecast.
///
/// When present, `hour` holds indices 0-23 for 00:00-23:00.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DayAggregates,
    #[serde(default)]
    pub hour: Option<Vec<HourRecord>>,
}

/// An ordered set of forecast days where index 0 is today and index 1 is tomorrow
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastSet {
    pub days: Vec<ForecastDay>,
}

/// The tomorrow slice of a forecast, reduced to what the report shows
#[derive(Clone, Debug, PartialEq)]
pub struct CitySummary {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: Option<String>,
}

/// Per city summaries, a missing city means no data for it
pub type ResultTable = HashMap<String, CitySummary>;

impl ForecastSet {
    /// Returns the tomorrow slice, or None if the set holds fewer than two days
    ///
    pub fn tomorrow(&self) -> Option<&ForecastDay> {
        self.days.get(1)
    }

    /// Extracts a city summary from the tomorrow slice
    ///
    pub fn tomorrow_summary(&self) -> Option<CitySummary> {
        self.tomorrow().map(CitySummary::from_day)
    }
}

impl CitySummary {
    /// Builds a summary from a forecast day
    ///
    /// The wind direction is taken from the 12:00 record, and is None if the hourly
    /// records are missing or too short to hold it.
    ///
    /// # Arguments
    ///
    /// * 'forecast_day' - the day to summarize
    pub fn from_day(forecast_day: &ForecastDay) -> CitySummary {
        let wind_direction = forecast_day.hour
            .as_ref()
            .and_then(|h| h.get(NOON_HOUR_INDEX))
            .map(|h| h.wind_dir.clone());

        CitySummary {
            date: forecast_day.date,
            min_temp: forecast_day.day.min_temp_c,
            max_temp: forecast_day.day.max_temp_c,
            humidity: forecast_day.day.avg_humidity,
            wind_speed: forecast_day.day.max_wind_kph,
            wind_direction,
        }
    }
}
