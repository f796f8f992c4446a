pub mod aggregates;
pub mod temperature;

pub use aggregates::{
    CountryMeanEntry, CountrySeries, GlobalSeries, SelectedSeries, YearlyGlobalEntry,
    YearlySelectedEntry,
};
pub use temperature::{GlobalRecord, TemperatureRecord};
