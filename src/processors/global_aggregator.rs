use crate::models::{GlobalRecord, GlobalSeries, YearlyGlobalEntry};
use crate::processors::mean::MeanAccumulator;
use std::collections::BTreeMap;

/// Yearly worldwide land temperature with its uncertainty.
pub struct GlobalAggregator;

impl GlobalAggregator {
    pub fn new() -> Self {
        Self
    }

    /// One entry per distinct year, ascending
    pub fn aggregate(&self, records: &[GlobalRecord]) -> GlobalSeries {
        let mut years: BTreeMap<&str, (MeanAccumulator, MeanAccumulator)> = BTreeMap::new();

        for record in records {
            let (temperature, uncertainty) = years.entry(record.year.as_str()).or_default();
            temperature.push(record.land_average_temperature);
            uncertainty.push(record.land_average_temperature_uncertainty);
        }

        let entries = years
            .into_iter()
            .map(|(year, (temperature, uncertainty))| YearlyGlobalEntry {
                year: year.to_string(),
                mean_temperature: temperature.mean(),
                mean_uncertainty: uncertainty.mean(),
            })
            .collect();

        GlobalSeries { entries }
    }
}

impl Default for GlobalAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, temp: Option<f64>, uncertainty: Option<f64>) -> GlobalRecord {
        GlobalRecord::new(date, temp, uncertainty).unwrap()
    }

    #[test]
    fn test_yearly_mean_ignores_missing_months() {
        let records = vec![
            record("1900-01-01", Some(10.0), Some(0.5)),
            record("1900-02-01", Some(12.0), None),
            record("1900-03-01", None, Some(0.7)),
        ];

        let series = GlobalAggregator::new().aggregate(&records);

        assert_eq!(series.len(), 1);
        assert_eq!(series.entries[0].year, "1900");
        assert_eq!(series.entries[0].mean_temperature, Some(11.0));
        assert_eq!(series.entries[0].mean_uncertainty, Some(0.6));
    }

    #[test]
    fn test_years_are_ascending_and_aligned() {
        let records = vec![
            record("1752-01-01", Some(0.3), Some(3.0)),
            record("1750-01-01", Some(3.0), Some(3.5)),
            record("1751-06-01", None, None),
            record("1750-07-01", Some(15.0), Some(2.5)),
        ];

        let series = GlobalAggregator::new().aggregate(&records);

        assert_eq!(series.years(), vec!["1750", "1751", "1752"]);
        let uncertainties: Vec<Option<f64>> =
            series.entries.iter().map(|e| e.mean_uncertainty).collect();
        assert_eq!(series.mean_temperatures().len(), series.years().len());
        assert_eq!(series.mean_temperatures(), vec![Some(9.0), None, Some(0.3)]);
        assert_eq!(uncertainties, vec![Some(3.0), None, Some(3.0)]);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(GlobalAggregator::new().aggregate(&[]).is_empty());
    }
}
