pub mod bar;
pub mod choropleth;
pub mod figure;
pub mod line;
pub mod palette;

pub use bar::RankingBarBuilder;
pub use choropleth::ChoroplethBuilder;
pub use figure::{Figure, Layout, Trace};
pub use line::{CountryTrendBuilder, GlobalTrendBuilder};
