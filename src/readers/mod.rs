pub mod country_reader;
pub mod csv_source;
pub mod dataset_loader;
pub mod global_reader;

pub use country_reader::CountryTemperatureReader;
pub use csv_source::{CsvSource, ParsedRows, RowPolicy};
pub use dataset_loader::{DatasetLoader, Datasets};
pub use global_reader::GlobalTemperatureReader;
