use crate::models::TemperatureRecord;
use crate::utils::constants::{COUNTRY_RENAMES, EXCLUDED_COUNTRIES};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Removes continent-level pseudo-countries and restores canonical names.
///
/// The source table lists e.g. both "Denmark" (including Greenland) and
/// "Denmark (Europe)". The unsuffixed row is dropped first, then the suffixed
/// one takes the canonical name, so the exclusion and rename sets never collide.
pub struct CountryNormalizer {
    excluded: HashSet<String>,
    renames: HashMap<String, String>,
}

impl CountryNormalizer {
    pub fn new() -> Self {
        Self::with_rules(
            EXCLUDED_COUNTRIES.iter().copied(),
            COUNTRY_RENAMES.iter().copied(),
        )
    }

    pub fn with_rules<'a>(
        excluded: impl IntoIterator<Item = &'a str>,
        renames: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            excluded: excluded.into_iter().map(str::to_string).collect(),
            renames: renames
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    pub fn is_excluded(&self, country: &str) -> bool {
        self.excluded.contains(country)
    }

    /// Canonical name for a country that survived exclusion
    pub fn canonical_name<'a>(&'a self, country: &'a str) -> &'a str {
        self.renames
            .get(country)
            .map(String::as_str)
            .unwrap_or(country)
    }

    /// Produce the normalized table; the input is left untouched
    pub fn normalize(&self, records: &[TemperatureRecord]) -> Vec<TemperatureRecord> {
        let normalized: Vec<TemperatureRecord> = records
            .iter()
            .filter(|r| !self.is_excluded(&r.country))
            .map(|r| {
                let canonical = self.canonical_name(&r.country);
                if canonical == r.country {
                    r.clone()
                } else {
                    r.clone().with_country(canonical)
                }
            })
            .collect();

        debug!(
            "Normalized country table: {} of {} rows kept",
            normalized.len(),
            records.len()
        );

        normalized
    }
}

impl Default for CountryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::CountryAggregator;

    fn record(country: &str, temp: Option<f64>) -> TemperatureRecord {
        TemperatureRecord::new("1900-01-01", country, temp, None).unwrap()
    }

    fn count(records: &[TemperatureRecord], country: &str) -> usize {
        records.iter().filter(|r| r.country == country).count()
    }

    #[test]
    fn test_excluded_countries_are_removed() {
        let mut records: Vec<TemperatureRecord> = EXCLUDED_COUNTRIES
            .iter()
            .map(|c| record(c, Some(1.0)))
            .collect();
        records.push(record("Chad", Some(27.0)));

        let normalized = CountryNormalizer::new().normalize(&records);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].country, "Chad");
        for excluded in EXCLUDED_COUNTRIES {
            assert_eq!(count(&normalized, excluded), 0);
        }
    }

    #[test]
    fn test_suffixed_names_become_canonical() {
        let records = vec![
            record("France (Europe)", Some(10.0)),
            record("France (Europe)", Some(11.0)),
            record("France", Some(30.0)),
            record("United Kingdom (Europe)", Some(9.0)),
            record("Netherlands (Europe)", Some(9.5)),
        ];

        let normalized = CountryNormalizer::new().normalize(&records);

        for (suffixed, canonical) in COUNTRY_RENAMES {
            assert_eq!(count(&normalized, suffixed), 0);
            assert_eq!(count(&normalized, canonical), count(&records, suffixed));
        }
        assert_eq!(normalized.len(), 4);
    }

    #[test]
    fn test_denmark_pseudo_entry_does_not_leak_into_mean() {
        let records = vec![
            record("Denmark (Europe)", Some(5.0)),
            record("Denmark", Some(99.0)),
        ];

        let normalized = CountryNormalizer::new().normalize(&records);
        let means = CountryAggregator::new().aggregate(&normalized);

        assert_eq!(means.len(), 1);
        assert_eq!(means[0].country, "Denmark");
        assert_eq!(means[0].mean_temperature, Some(5.0));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![record("Denmark (Europe)", Some(5.0))];
        let _ = CountryNormalizer::new().normalize(&records);

        assert_eq!(records[0].country, "Denmark (Europe)");
    }

    #[test]
    fn test_canonical_name() {
        let normalizer = CountryNormalizer::new();
        assert_eq!(normalizer.canonical_name("France (Europe)"), "France");
        assert_eq!(normalizer.canonical_name("Chad"), "Chad");
        assert!(normalizer.is_excluded("Antarctica"));
    }
}
