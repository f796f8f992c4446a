use crate::utils::constants::DEFAULT_OUTPUT_DIR;
use chrono::{Datelike, Local, NaiveDate};
use std::path::PathBuf;

/// Generate default dashboard filename with format: climate-dashboard-{YYMMDD}.html
pub fn generate_default_dashboard_filename() -> PathBuf {
    dashboard_filename_for(Local::now().date_naive(), "html")
}

/// Generate default figure export filename with format: climate-dashboard-{YYMMDD}.json
pub fn generate_default_figures_filename() -> PathBuf {
    dashboard_filename_for(Local::now().date_naive(), "json")
}

fn dashboard_filename_for(date: NaiveDate, extension: &str) -> PathBuf {
    let year = date.year() % 100; // Get last 2 digits of year
    let filename = format!(
        "climate-dashboard-{:02}{:02}{:02}.{}",
        year,
        date.month(),
        date.day(),
        extension
    );
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_filename_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let filename = dashboard_filename_for(date, "html");

        assert_eq!(
            filename,
            PathBuf::from("output").join("climate-dashboard-240307.html")
        );
    }

    #[test]
    fn test_generate_default_filenames() {
        let html = generate_default_dashboard_filename();
        let json = generate_default_figures_filename();

        assert!(html.starts_with("output"));
        assert!(html.to_string_lossy().ends_with(".html"));
        assert!(json.to_string_lossy().ends_with(".json"));

        let file_part = html.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_part.starts_with("climate-dashboard-"));
        assert_eq!(file_part.len(), "climate-dashboard-YYMMDD.html".len());
    }
}
