use std::io::{self, Write};
use anyhow::Result;
use chrono::Local;
use log::{error, info};
use crate::initialization::init;
use crate::worker::{run, CityOutcome};

mod config;
mod initialization;
mod logging;
mod manager_forecast;
mod manager_mock;
mod models;
mod report;
mod worker;

fn main() -> Result<()> {
    // If initialization fails we can't even log, so just hand the error back
    let (config, mut mgr) = match init() {
        Ok((c, m)) => (c, m),
        Err(e) => {
            return Err(anyhow::anyhow!("Initialization failed: {}", e));
        }
    };

    let reference_date = Local::now().date_naive();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Missing data for some or all cities is not a failure, only being unable to print is
    match run(&mgr.forecast, &mut mgr.mock, &config.cities, reference_date, &mut out) {
        Ok(report) => {
            let fallen_back = report.outcomes.iter().filter(|(_, o)| *o == CityOutcome::FallenBack).count();
            info!("report for {} printed, {} of {} cities with data, {} from mock data",
                report.date.map(|d| d.to_string()).unwrap_or_else(|| "no date".to_string()),
                report.table.len(),
                config.cities.len(),
                fallen_back);
        },
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(e.into());
        }
    }

    out.flush()?;

    Ok(())
}
