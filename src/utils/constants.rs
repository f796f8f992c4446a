/// File names
pub const COUNTRY_TEMPERATURES_FILE: &str = "GlobalLandTemperaturesByCountry.csv";
pub const GLOBAL_TEMPERATURES_FILE: &str = "GlobalTemperatures.csv";

/// Directory names
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Number of leading characters of a date that hold the year
pub const YEAR_PREFIX_LEN: usize = 4;

/// Pseudo-countries that duplicate suffixed entries or are not countries at all
pub const EXCLUDED_COUNTRIES: [&str; 8] = [
    "Denmark",
    "Antarctica",
    "France",
    "Europe",
    "Netherlands",
    "United Kingdom",
    "Africa",
    "South America",
];

/// Suffixed entities restored to their canonical names after exclusion
pub const COUNTRY_RENAMES: [(&str, &str); 4] = [
    ("Denmark (Europe)", "Denmark"),
    ("France (Europe)", "France"),
    ("Netherlands (Europe)", "Netherlands"),
    ("United Kingdom (Europe)", "United Kingdom"),
];

/// Countries compared in the trend chart, in legend order
pub const DEFAULT_SELECTED_COUNTRIES: [&str; 6] = [
    "Russia",
    "United States",
    "Niger",
    "Greenland",
    "Australia",
    "Bolivia",
];

/// Leading distinct years skipped for the country trend chart; coverage is sparse before
pub const DEFAULT_YEAR_OFFSET: usize = 70;

/// Serving defaults
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

/// Plotly.js bundle loaded by the rendered page
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Chart colors
pub const UNCERTAINTY_COLOR: &str = "rgb(0, 255, 255)";
pub const GLOBAL_MEAN_COLOR: &str = "rgb(199, 121, 093)";
pub const BORDER_COLOR: &str = "rgb(0,0,0)";
pub const OCEAN_COLOR: &str = "rgb(0,255,255)";
pub const GRID_COLOR: &str = "rgb(102, 102, 102)";
pub const NO_DATA_COLOR: &str = "rgb(217, 217, 217)";
pub const SERIES_COLORS: [&str; 6] = [
    "rgb(0, 255, 255)",
    "rgb(255, 0, 255)",
    "rgb(0, 0, 0)",
    "rgb(255, 0, 0)",
    "rgb(0, 255, 0)",
    "rgb(0, 0, 255)",
];
