//! Composition of the pure stages into one dashboard pass.

use crate::charts::{
    ChoroplethBuilder, CountryTrendBuilder, Figure, GlobalTrendBuilder, RankingBarBuilder,
};
use crate::models::{CountryMeanEntry, GlobalSeries, SelectedSeries, TemperatureRecord};
use crate::processors::{
    CountryAggregator, CountryNormalizer, GlobalAggregator, SelectedCountryAggregator,
};
use crate::readers::Datasets;
use crate::settings::DashboardSettings;
use serde::Serialize;
use tracing::{debug, info};

/// Every aggregate the charts are built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub country_means: Vec<CountryMeanEntry>,
    pub global: GlobalSeries,
    pub selected: SelectedSeries,
}

impl DashboardData {
    pub fn compute(datasets: &Datasets, settings: &DashboardSettings) -> Self {
        let normalized: Vec<TemperatureRecord> =
            CountryNormalizer::new().normalize(&datasets.countries);

        let country_means = CountryAggregator::new().aggregate(&normalized);
        debug!("Computed means for {} countries", country_means.len());

        let global = GlobalAggregator::new().aggregate(&datasets.global);
        debug!("Computed global means for {} years", global.len());

        let selected = SelectedCountryAggregator::new()
            .with_countries(settings.selected_countries.clone())
            .with_year_offset(settings.year_offset)
            .aggregate(&normalized, &global.years());
        debug!(
            "Computed {} selected-country series over {} years",
            selected.series.len(),
            selected.years.len()
        );

        Self {
            country_means,
            global,
            selected,
        }
    }
}

/// The four chart descriptions of the page, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub temperature_map: Figure,
    pub country_ranking: Figure,
    pub global_trend: Figure,
    pub country_trends: Figure,
}

impl Dashboard {
    /// Run the whole pass over already loaded tables
    pub fn build(datasets: &Datasets, settings: &DashboardSettings) -> Self {
        let data = DashboardData::compute(datasets, settings);
        let dashboard = Self::from_data(&data);
        info!("Built dashboard with {} figures", dashboard.figures().len());
        dashboard
    }

    pub fn from_data(data: &DashboardData) -> Self {
        Self {
            temperature_map: ChoroplethBuilder::new().build(&data.country_means),
            country_ranking: RankingBarBuilder::new().build(&data.country_means),
            global_trend: GlobalTrendBuilder::new().build(&data.global),
            country_trends: CountryTrendBuilder::new().build(&data.selected),
        }
    }

    /// Figures paired with a stable element id
    pub fn figures(&self) -> [(&'static str, &Figure); 4] {
        [
            ("temperature-map", &self.temperature_map),
            ("country-ranking", &self.country_ranking),
            ("global-trend", &self.global_trend),
            ("country-trends", &self.country_trends),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GlobalRecord;

    fn datasets() -> Datasets {
        let countries = vec![
            TemperatureRecord::new("1900-01-01", "Denmark (Europe)", Some(5.0), None).unwrap(),
            TemperatureRecord::new("1900-01-01", "Denmark", Some(99.0), None).unwrap(),
            TemperatureRecord::new("1901-01-01", "Niger", Some(28.0), None).unwrap(),
            TemperatureRecord::new("1901-01-01", "Europe", Some(8.0), None).unwrap(),
        ];
        let global = vec![
            GlobalRecord::new("1900-01-01", Some(10.0), Some(0.5)).unwrap(),
            GlobalRecord::new("1900-02-01", Some(12.0), Some(0.5)).unwrap(),
            GlobalRecord::new("1900-03-01", None, None).unwrap(),
            GlobalRecord::new("1901-01-01", Some(9.0), Some(0.4)).unwrap(),
        ];
        Datasets {
            countries,
            global,
            skipped_rows: 0,
        }
    }

    #[test]
    fn test_compute_runs_every_stage() {
        let settings = DashboardSettings {
            year_offset: 1,
            selected_countries: vec!["Niger".to_string(), "Bolivia".to_string()],
            ..DashboardSettings::default()
        };

        let data = DashboardData::compute(&datasets(), &settings);

        let countries: Vec<&str> = data.country_means.iter().map(|e| e.country.as_str()).collect();
        assert_eq!(countries, vec!["Denmark", "Niger"]);
        assert_eq!(data.country_means[0].mean_temperature, Some(5.0));

        assert_eq!(data.global.years(), vec!["1900", "1901"]);
        assert_eq!(data.global.entries[0].mean_temperature, Some(11.0));

        assert_eq!(data.selected.years, vec!["1901"]);
        assert_eq!(data.selected.series[0].mean_temperatures, vec![Some(28.0)]);
        assert_eq!(data.selected.series[1].mean_temperatures, vec![None]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let settings = DashboardSettings::default();
        let first = Dashboard::build(&datasets(), &settings);
        let second = Dashboard::build(&datasets(), &settings);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_figure_ids_are_unique() {
        let dashboard = Dashboard::build(&Datasets::default(), &DashboardSettings::default());
        let ids: std::collections::HashSet<&str> =
            dashboard.figures().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), 4);
    }
}
