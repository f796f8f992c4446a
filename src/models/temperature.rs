use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::year_prefix;

/// One month of land temperature for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub date: String,
    pub year: String,
    pub country: String,
    pub average_temperature: Option<f64>,
    pub average_temperature_uncertainty: Option<f64>,
}

impl TemperatureRecord {
    pub fn new(
        date: impl Into<String>,
        country: impl Into<String>,
        average_temperature: Option<f64>,
        average_temperature_uncertainty: Option<f64>,
    ) -> Result<Self> {
        let date = date.into();
        let year = year_prefix(&date)?.to_string();

        Ok(Self {
            date,
            year,
            country: country.into(),
            average_temperature: average_temperature.filter(|t| !t.is_nan()),
            average_temperature_uncertainty: average_temperature_uncertainty
                .filter(|t| !t.is_nan()),
        })
    }

    /// Same record under another country name
    pub fn with_country(self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self
        }
    }
}

/// One month of worldwide land temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalRecord {
    pub date: String,
    pub year: String,
    pub land_average_temperature: Option<f64>,
    pub land_average_temperature_uncertainty: Option<f64>,
}

impl GlobalRecord {
    pub fn new(
        date: impl Into<String>,
        land_average_temperature: Option<f64>,
        land_average_temperature_uncertainty: Option<f64>,
    ) -> Result<Self> {
        let date = date.into();
        let year = year_prefix(&date)?.to_string();

        Ok(Self {
            date,
            year,
            land_average_temperature: land_average_temperature.filter(|t| !t.is_nan()),
            land_average_temperature_uncertainty: land_average_temperature_uncertainty
                .filter(|t| !t.is_nan()),
        })
    }
}
