use crate::error::Result;
use crate::models::TemperatureRecord;
use crate::readers::csv_source::{CsvSource, ParsedRows, RowPolicy};
use crate::utils::constants::COUNTRY_TEMPERATURES_FILE;
use serde::Deserialize;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = [
    "dt",
    "AverageTemperature",
    "AverageTemperatureUncertainty",
    "Country",
];

#[derive(Debug, Deserialize)]
struct CountryRow {
    #[serde(rename = "dt")]
    date: String,
    #[serde(rename = "AverageTemperature")]
    average_temperature: Option<f64>,
    #[serde(rename = "AverageTemperatureUncertainty")]
    average_temperature_uncertainty: Option<f64>,
    #[serde(rename = "Country")]
    country: String,
}

impl TryFrom<CountryRow> for TemperatureRecord {
    type Error = crate::error::ProcessingError;

    fn try_from(row: CountryRow) -> Result<Self> {
        TemperatureRecord::new(
            row.date,
            row.country,
            row.average_temperature,
            row.average_temperature_uncertainty,
        )
    }
}

/// Reader for the per-country monthly land temperature table
pub struct CountryTemperatureReader {
    policy: RowPolicy,
}

impl CountryTemperatureReader {
    pub fn new() -> Self {
        Self {
            policy: RowPolicy::Abort,
        }
    }

    pub fn with_row_policy(policy: RowPolicy) -> Self {
        Self { policy }
    }

    /// Read records from a file, in file order
    pub fn read_records(&self, path: &Path) -> Result<ParsedRows<TemperatureRecord>> {
        self.source()
            .read_path(path, |row: CountryRow| TemperatureRecord::try_from(row))
    }

    /// Parse records from CSV text
    pub fn parse_records(&self, content: &str) -> Result<ParsedRows<TemperatureRecord>> {
        self.source()
            .parse_str(content, |row: CountryRow| TemperatureRecord::try_from(row))
    }

    fn source(&self) -> CsvSource<'static> {
        CsvSource::new(COUNTRY_TEMPERATURES_FILE, &REQUIRED_COLUMNS, self.policy)
    }
}

impl Default for CountryTemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}
