use crate::models::{CountryMeanEntry, TemperatureRecord};
use crate::processors::mean::MeanAccumulator;
use std::collections::BTreeMap;

/// Mean temperature per country over the whole record.
pub struct CountryAggregator;

impl CountryAggregator {
    pub fn new() -> Self {
        Self
    }

    /// One entry per distinct country, ordered by name.
    ///
    /// Countries without a single measured month keep their slot with a `None`
    /// mean so chart categories stay stable.
    pub fn aggregate(&self, records: &[TemperatureRecord]) -> Vec<CountryMeanEntry> {
        let mut groups: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();

        for record in records {
            groups
                .entry(record.country.as_str())
                .or_default()
                .push(record.average_temperature);
        }

        groups
            .into_iter()
            .map(|(country, acc)| CountryMeanEntry {
                country: country.to_string(),
                mean_temperature: acc.mean(),
            })
            .collect()
    }
}

impl Default for CountryAggregator {
    fn default() -> Self {
        Self::new()
    }
}
