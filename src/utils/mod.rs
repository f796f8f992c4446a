pub mod constants;
pub mod filename;
pub mod progress;
pub mod year;

pub use constants::*;
pub use filename::{generate_default_dashboard_filename, generate_default_figures_filename};
pub use progress::ProgressReporter;
pub use year::year_prefix;
