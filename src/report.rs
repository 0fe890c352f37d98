use std::io::{self, Write};
use chrono::NaiveDate;
use crate::models::{CitySummary, ResultTable};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DATA_HEADER: &str = "No weather data available from any source";
const SEPARATOR: &str = "-------------|----------|----------|------------|------------|----------";

/// Writes the report header and the weather table
///
/// Rows are written in the order of `cities`, cities missing in `table` get N/A in all columns.
///
/// # Arguments
///
/// * 'out' - where to write the report
/// * 'cities' - the fixed list of cities
/// * 'table' - summaries per city
/// * 'date' - the forecast date, None if no data was obtained at all
pub fn write_report<W: Write>(out: &mut W, cities: &[String], table: &ResultTable, date: Option<NaiveDate>) -> io::Result<()> {
    match date {
        Some(date) => writeln!(out, "Weather Forecast for {}", date)?,
        None => writeln!(out, "{}", NO_DATA_HEADER)?,
    }
    writeln!(out)?;

    writeln!(out, "{:<12} | {:<8} | {:<8} | {:<10} | {:<10} | {:<8}",
             "City", "Min°C", "Max°C", "Humidity%", "Wind kph", "Wind Dir")?;
    writeln!(out, "{}", SEPARATOR)?;

    for city in cities {
        writeln!(out, "{}", format_row(city, table.get(city)))?;
    }

    Ok(())
}

/// Formats one table row
///
/// # Arguments
///
/// * 'city' - name of the city
/// * 'summary' - the city's summary, if any
fn format_row(city: &str, summary: Option<&CitySummary>) -> String {
    match summary {
        Some(s) => format!("{:<12} | {:<8.1} | {:<8.1} | {:<10.0} | {:<10.1} | {:<8}",
                           city,
                           s.min_temp,
                           s.max_temp,
                           s.humidity,
                           s.wind_speed,
                           s.wind_direction.as_deref().unwrap_or(NOT_AVAILABLE)),
        None => format!("{:<12} | {:<8} | {:<8} | {:<10} | {:<10} | {:<8}",
                        city, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(wind_direction: Option<&str>) -> CitySummary {
        CitySummary {
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            min_temp: 10.0,
            max_temp: 22.0,
            humidity: 65.0,
            wind_speed: 15.3,
            wind_direction: wind_direction.map(str::to_string),
        }
    }

    #[test]
    fn row_with_data() {
        assert_eq!(format_row("Chisinau", Some(&summary(Some("NE")))),
                   "Chisinau     | 10.0     | 22.0     | 65         | 15.3       | NE      ");
    }

    #[test]
    fn row_without_wind_direction() {
        let row = format_row("Kyiv", Some(&summary(None)));

        assert!(row.ends_with("| N/A     "));
    }

    #[test]
    fn row_without_data() {
        let cells = format_row("Amsterdam", None)
            .split('|')
            .map(|c| c.trim().to_string())
            .collect::<Vec<String>>();

        assert_eq!(cells, vec!["Amsterdam", "N/A", "N/A", "N/A", "N/A", "N/A"]);
    }

    #[test]
    fn report_lists_every_city_in_order() {
        let cities = vec!["Madrid".to_string(), "Chisinau".to_string()];
        let mut table = ResultTable::new();
        table.insert("Chisinau".to_string(), summary(Some("NE")));

        let mut out = Vec::new();
        write_report(&mut out, &cities, &table, Some(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "Weather Forecast for 2026-10-19");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("City         | Min°C    | Max°C    | Humidity%  | Wind kph   | Wind Dir"));
        assert_eq!(lines[3], SEPARATOR);
        assert!(lines[4].starts_with("Madrid       | N/A"));
        assert!(lines[5].starts_with("Chisinau     | 10.0"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn report_without_any_data() {
        let cities = vec!["Madrid".to_string()];

        let mut out = Vec::new();
        write_report(&mut out, &cities, &ResultTable::new(), None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(NO_DATA_HEADER));
        assert!(text.contains("Madrid       | N/A"));
    }
}
