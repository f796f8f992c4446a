use crate::models::CountryMeanEntry;
use crate::pipeline::DashboardData;
use crate::readers::Datasets;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub country_rows: usize,
    pub global_rows: usize,
    pub skipped_rows: usize,
    pub raw_countries: usize,
    pub normalized_countries: usize,
    pub countries_without_data: usize,
    pub year_range: Option<(String, String)>,
    pub warmest: Option<CountryMeanEntry>,
    pub coldest: Option<CountryMeanEntry>,
    pub first_global_mean: Option<(String, f64)>,
    pub last_global_mean: Option<(String, f64)>,
}

pub struct DatasetAnalyzer;

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, datasets: &Datasets, data: &DashboardData) -> DatasetStatistics {
        let raw_countries: HashSet<&str> = datasets
            .countries
            .iter()
            .map(|r| r.country.as_str())
            .collect();

        let with_data = || {
            data.country_means
                .iter()
                .filter_map(|e| e.mean_temperature.map(|m| (e, m)))
        };
        let warmest = with_data()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e.clone());
        let coldest = with_data()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e.clone());

        let years = data.global.years();
        let year_range = match (years.first(), years.last()) {
            (Some(first), Some(last)) => Some((first.clone(), last.clone())),
            _ => None,
        };

        let defined_means = || {
            data.global
                .entries
                .iter()
                .filter_map(|e| e.mean_temperature.map(|m| (e.year.clone(), m)))
        };

        DatasetStatistics {
            country_rows: datasets.countries.len(),
            global_rows: datasets.global.len(),
            skipped_rows: datasets.skipped_rows,
            raw_countries: raw_countries.len(),
            normalized_countries: data.country_means.len(),
            countries_without_data: data
                .country_means
                .iter()
                .filter(|e| e.mean_temperature.is_none())
                .count(),
            year_range,
            warmest,
            coldest,
            first_global_mean: defined_means().next(),
            last_global_mean: defined_means().last(),
        }
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_country(entry: &Option<CountryMeanEntry>) -> String {
    match entry {
        Some(CountryMeanEntry {
            country,
            mean_temperature: Some(mean),
        }) => format!("{} ({:.1}°C)", country, mean),
        _ => "No valid measurements".to_string(),
    }
}

fn describe_year(point: &Option<(String, f64)>) -> String {
    match point {
        Some((year, mean)) => format!("{:.2}°C in {}", mean, year),
        None => "No valid measurements".to_string(),
    }
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        let years = match &self.year_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "No dated records".to_string(),
        };

        format!(
            "Country records: {} ({} skipped rows overall)\n\
            Global records: {}\n\
            Countries: {} after normalization ({} in source, {} without data)\n\
            Years: {}\n\
            Warmest country: {}\n\
            Coldest country: {}\n\
            Global land mean: {} -> {}",
            self.country_rows,
            self.skipped_rows,
            self.global_rows,
            self.normalized_countries,
            self.raw_countries,
            self.countries_without_data,
            years,
            describe_country(&self.warmest),
            describe_country(&self.coldest),
            describe_year(&self.first_global_mean),
            describe_year(&self.last_global_mean),
        )
    }
}
