use serde::{Deserialize, Serialize};

/// Mean temperature of one country over every available month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMeanEntry {
    pub country: String,
    pub mean_temperature: Option<f64>,
}

/// Worldwide mean temperature and uncertainty for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyGlobalEntry {
    pub year: String,
    pub mean_temperature: Option<f64>,
    pub mean_uncertainty: Option<f64>,
}

impl YearlyGlobalEntry {
    /// Mean plus uncertainty, when both are known
    pub fn upper_bound(&self) -> Option<f64> {
        Some(self.mean_temperature? + self.mean_uncertainty?)
    }

    /// Mean minus uncertainty, when both are known
    pub fn lower_bound(&self) -> Option<f64> {
        Some(self.mean_temperature? - self.mean_uncertainty?)
    }
}

/// Mean temperature of one selected country in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySelectedEntry {
    pub year: String,
    pub country: String,
    pub mean_temperature: Option<f64>,
}

/// Worldwide series, one entry per distinct year in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSeries {
    pub entries: Vec<YearlyGlobalEntry>,
}

impl GlobalSeries {
    pub fn years(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.year.clone()).collect()
    }

    pub fn mean_temperatures(&self) -> Vec<Option<f64>> {
        self.entries.iter().map(|e| e.mean_temperature).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Yearly means of one country, indexed like [`SelectedSeries::years`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySeries {
    pub country: String,
    pub mean_temperatures: Vec<Option<f64>>,
}

impl CountrySeries {
    pub fn has_data(&self) -> bool {
        self.mean_temperatures.iter().any(Option::is_some)
    }
}

/// Yearly means for the selected countries over a shared run of years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedSeries {
    pub years: Vec<String>,
    pub series: Vec<CountrySeries>,
}

impl SelectedSeries {
    /// Flatten into per-country, per-year entries, country-major
    pub fn entries(&self) -> Vec<YearlySelectedEntry> {
        self.series
            .iter()
            .flat_map(|s| {
                self.years
                    .iter()
                    .zip(&s.mean_temperatures)
                    .map(move |(year, mean)| YearlySelectedEntry {
                        year: year.clone(),
                        country: s.country.clone(),
                        mean_temperature: *mean,
                    })
            })
            .collect()
    }
}
