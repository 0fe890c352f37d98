use std::io::{self, Write};
use chrono::NaiveDate;
use log::{error, info, warn};
use thiserror::Error;
use crate::manager_forecast::ForecastSource;
use crate::manager_mock::MockForecast;
use crate::models::ResultTable;
use crate::report::write_report;

/// Days to request, today and tomorrow
pub const FORECAST_DAYS: u8 = 2;
pub const FALLBACK_NOTICE: &str = "Using locally generated forecast data as fallback...";

/// How a city ended up in the report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CityOutcome {
    Fetched,
    FallenBack,
    Unavailable,
}

/// Result of one report run
#[derive(Debug)]
pub struct Report {
    pub date: Option<NaiveDate>,
    pub table: ResultTable,
    pub outcomes: Vec<(String, CityOutcome)>,
}

/// Runs a report, i.e. gets tomorrow's forecast for each city and prints the weather table
///
/// A failing forecast source never aborts the run; the city falls back to mock data,
/// or is reported without data.
///
/// # Arguments
///
/// * 'source' - the forecast source to try first
/// * 'mock' - fallback forecast generator
/// * 'cities' - the fixed list of cities, also the order of the table rows
/// * 'reference_date' - the date representing today
/// * 'out' - where notices and the table are written
pub fn run<S: ForecastSource, W: Write>(source: &S, mock: &mut MockForecast, cities: &[String], reference_date: NaiveDate, out: &mut W) -> Result<Report, WorkerError> {
    writeln!(out, "Fetching weather forecast for tomorrow...")?;
    writeln!(out)?;

    let mut table = ResultTable::new();
    let mut date: Option<NaiveDate> = None;
    let mut outcomes: Vec<(String, CityOutcome)> = Vec::new();
    let mut fallback_noticed = false;

    for city in cities {
        let (summary, outcome) = match source.fetch(city, FORECAST_DAYS) {
            Ok(set) => (set.tomorrow_summary(), CityOutcome::Fetched),
            Err(e) => {
                warn!("forecast for {} failed: {}", city, e);
                writeln!(out, "API failed for {}, trying local data...", city)?;

                match mock.generate(reference_date) {
                    Ok(set) => {
                        if !fallback_noticed {
                            writeln!(out, "{}", FALLBACK_NOTICE)?;
                            writeln!(out)?;
                            fallback_noticed = true;
                        }
                        (set.tomorrow_summary(), CityOutcome::FallenBack)
                    },
                    Err(e) => {
                        error!("Error creating mock data for {}: {}", city, e);
                        (None, CityOutcome::Unavailable)
                    }
                }
            }
        };

        let outcome = match summary {
            Some(summary) => {
                // The report date is the first one found in list order
                if date.is_none() {
                    date = Some(summary.date);
                }
                table.insert(city.clone(), summary);
                outcome
            },
            None => {
                writeln!(out, "No data available for {}", city)?;
                CityOutcome::Unavailable
            }
        };

        info!("{}: {:?}", city, outcome);
        outcomes.push((city.clone(), outcome));
    }

    writeln!(out)?;
    write_report(out, cities, &table, date)?;

    Ok(Report { date, table, outcomes })
}

/// Error depicting errors that occur while running a report
///
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("error while writing report: {0:?}")]
    OutputError(String),
}

impl From<io::Error> for WorkerError {
    fn from(e: io::Error) -> Self {
        WorkerError::OutputError(e.to_string())
    }
}
