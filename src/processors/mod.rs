pub mod country_aggregator;
pub mod country_normalizer;
pub mod global_aggregator;
pub mod mean;
pub mod selected_aggregator;

pub use country_aggregator::CountryAggregator;
pub use country_normalizer::CountryNormalizer;
pub use global_aggregator::GlobalAggregator;
pub use mean::MeanAccumulator;
pub use selected_aggregator::SelectedCountryAggregator;
