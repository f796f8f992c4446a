use crate::error::{ProcessingError, Result};
use crate::models::GlobalRecord;
use crate::readers::csv_source::{CsvSource, ParsedRows, RowPolicy};
use crate::utils::constants::GLOBAL_TEMPERATURES_FILE;
use serde::Deserialize;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = [
    "dt",
    "LandAverageTemperature",
    "LandAverageTemperatureUncertainty",
];

// Max/min and land-and-ocean columns are present in the file but unused.
#[derive(Debug, Deserialize)]
struct GlobalRow {
    #[serde(rename = "dt")]
    date: String,
    #[serde(rename = "LandAverageTemperature")]
    land_average_temperature: Option<f64>,
    #[serde(rename = "LandAverageTemperatureUncertainty")]
    land_average_temperature_uncertainty: Option<f64>,
}

impl TryFrom<GlobalRow> for GlobalRecord {
    type Error = ProcessingError;

    fn try_from(row: GlobalRow) -> Result<Self> {
        GlobalRecord::new(
            row.date,
            row.land_average_temperature,
            row.land_average_temperature_uncertainty,
        )
    }
}

/// Reader for the worldwide monthly land temperature table
pub struct GlobalTemperatureReader {
    policy: RowPolicy,
}

impl GlobalTemperatureReader {
    pub fn new() -> Self {
        Self {
            policy: RowPolicy::Abort,
        }
    }

    pub fn with_row_policy(policy: RowPolicy) -> Self {
        Self { policy }
    }

    pub fn read_records(&self, path: &Path) -> Result<ParsedRows<GlobalRecord>> {
        self.source()
            .read_path(path, |row: GlobalRow| GlobalRecord::try_from(row))
    }

    pub fn parse_records(&self, content: &str) -> Result<ParsedRows<GlobalRecord>> {
        self.source()
            .parse_str(content, |row: GlobalRow| GlobalRecord::try_from(row))
    }

    fn source(&self) -> CsvSource<'static> {
        CsvSource::new(GLOBAL_TEMPERATURES_FILE, &REQUIRED_COLUMNS, self.policy)
    }
}

impl Default for GlobalTemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}
