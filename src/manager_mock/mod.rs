use std::ops::Range;
use chrono::{Days, NaiveDate};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use crate::models::{DayAggregates, ForecastDay, ForecastSet, HourRecord};

pub const MIN_TEMP_RANGE: Range<f64> = 12.0..22.0;
pub const MAX_TEMP_RANGE: Range<f64> = 20.0..35.0;
pub const HUMIDITY_RANGE: Range<f64> = 50.0..80.0;
pub const WIND_SPEED_RANGE: Range<f64> = 10.0..30.0;
pub const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Generates synthetic forecasts to be used when the weather API can't deliver
///
/// The generator has no state other than its random source, and it never looks
/// at previously fetched data.
pub struct MockForecast {
    rng: StdRng,
}

impl MockForecast {
    /// Returns a generator seeded from system entropy
    ///
    pub fn new() -> MockForecast {
        MockForecast { rng: StdRng::from_entropy() }
    }

    /// Returns a generator that produces a reproducible sequence of forecasts
    ///
    /// # Arguments
    ///
    /// * 'seed' - seed for the random source
    pub fn with_seed(seed: u64) -> MockForecast {
        MockForecast { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generates a two day forecast, today and tomorrow
    ///
    /// # Arguments
    ///
    /// * 'reference_date' - the date representing today
    pub fn generate(&mut self, reference_date: NaiveDate) -> Result<ForecastSet, MockError> {
        let tomorrow = reference_date
            .checked_add_days(Days::new(1))
            .ok_or(MockError::DateOutOfRange(reference_date))?;

        let days = vec![self.mock_day(reference_date), self.mock_day(tomorrow)];
        debug!("mock forecast generated for {} and {}", reference_date, tomorrow);

        Ok(ForecastSet { days })
    }

    /// Creates one forecast day with random aggregates and a random wind direction per hour
    ///
    /// # Arguments
    ///
    /// * 'date' - the date of the forecast day
    fn mock_day(&mut self, date: NaiveDate) -> ForecastDay {
        let day = DayAggregates {
            min_temp_c: self.rng.gen_range(MIN_TEMP_RANGE),
            max_temp_c: self.rng.gen_range(MAX_TEMP_RANGE),
            avg_humidity: self.rng.gen_range(HUMIDITY_RANGE),
            max_wind_kph: self.rng.gen_range(WIND_SPEED_RANGE),
        };

        let hour = (0..24)
            .map(|h| HourRecord {
                time: format!("{} {:02}:00", date.format("%Y-%m-%d"), h),
                wind_dir: WIND_DIRECTIONS[self.rng.gen_range(0..WIND_DIRECTIONS.len())].to_string(),
            })
            .collect::<Vec<HourRecord>>();

        ForecastDay { date, day, hour: Some(hour) }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MockError {
    #[error("DateOutOfRange: no day follows {0}")]
    DateOutOfRange(NaiveDate),
}
