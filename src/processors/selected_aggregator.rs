use crate::models::{CountrySeries, SelectedSeries, TemperatureRecord};
use crate::processors::mean::MeanAccumulator;
use crate::utils::constants::{DEFAULT_SELECTED_COUNTRIES, DEFAULT_YEAR_OFFSET};
use std::collections::HashMap;
use tracing::warn;

/// Yearly means for a short, ordered list of countries.
pub struct SelectedCountryAggregator {
    countries: Vec<String>,
    year_offset: usize,
}

impl SelectedCountryAggregator {
    pub fn new() -> Self {
        Self {
            countries: DEFAULT_SELECTED_COUNTRIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            year_offset: DEFAULT_YEAR_OFFSET,
        }
    }

    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_year_offset(mut self, year_offset: usize) -> Self {
        self.year_offset = year_offset;
        self
    }

    /// The trailing part of `years` that the series cover
    pub fn restrict_years<'a>(&self, years: &'a [String]) -> &'a [String] {
        years.get(self.year_offset..).unwrap_or(&[])
    }

    /// One series per configured country, each aligned to `years[offset..]`.
    ///
    /// `years` is the ascending year sequence of the global series. A country
    /// missing from `records` yields a series of `None`.
    pub fn aggregate(&self, records: &[TemperatureRecord], years: &[String]) -> SelectedSeries {
        let years = self.restrict_years(years);
        let year_index: HashMap<&str, usize> = years
            .iter()
            .enumerate()
            .map(|(i, y)| (y.as_str(), i))
            .collect();

        let mut series: Vec<Vec<MeanAccumulator>> =
            vec![vec![MeanAccumulator::new(); years.len()]; self.countries.len()];
        // A name listed twice fills every position it holds
        let mut country_index: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, country) in self.countries.iter().enumerate() {
            country_index.entry(country.trim()).or_default().push(i);
        }

        for record in records {
            let Some(positions) = country_index.get(record.country.as_str()) else {
                continue;
            };
            let Some(&y) = year_index.get(record.year.as_str()) else {
                continue;
            };
            for &c in positions {
                series[c][y].push(record.average_temperature);
            }
        }

        let series: Vec<CountrySeries> = self
            .countries
            .iter()
            .zip(series)
            .map(|(country, accs)| CountrySeries {
                country: country.trim().to_string(),
                mean_temperatures: accs.iter().map(MeanAccumulator::mean).collect(),
            })
            .collect();

        for s in series.iter().filter(|s| !s.has_data()) {
            warn!("No temperatures for selected country '{}'", s.country);
        }

        SelectedSeries {
            years: years.to_vec(),
            series,
        }
    }
}

impl Default for SelectedCountryAggregator {
    fn default() -> Self {
        Self::new()
    }
}
