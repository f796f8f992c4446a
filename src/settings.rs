use crate::error::Result;
use crate::readers::RowPolicy;
use crate::utils::constants::{DEFAULT_DATA_DIR, DEFAULT_SELECTED_COUNTRIES, DEFAULT_YEAR_OFFSET};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Prefix of environment variables that override settings, e.g. `CLIMATE_DASHBOARD_YEAR_OFFSET`
pub const ENV_PREFIX: &str = "CLIMATE_DASHBOARD";

/// Run settings: defaults, then an optional TOML file, then the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardSettings {
    pub data_dir: PathBuf,

    #[validate(length(min = 1), custom(function = "validate_country_names"))]
    pub selected_countries: Vec<String>,

    pub year_offset: usize,

    pub row_policy: RowPolicy,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            selected_countries: DEFAULT_SELECTED_COUNTRIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            year_offset: DEFAULT_YEAR_OFFSET,
            row_policy: RowPolicy::Abort,
        }
    }
}

impl DashboardSettings {
    /// Layer an optional settings file and the environment over the defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_from(config_file, None)
    }

    // `env` replaces the process environment when given
    fn load_from(config_file: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let mut settings: DashboardSettings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("selected_countries")
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        // Names are matched against trimmed CSV fields
        settings.selected_countries = settings
            .selected_countries
            .iter()
            .map(|c| c.trim().to_string())
            .collect();

        settings.validate()?;
        Ok(settings)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_row_policy(mut self, row_policy: Option<RowPolicy>) -> Self {
        if let Some(policy) = row_policy {
            self.row_policy = policy;
        }
        self
    }
}

fn validate_country_names(countries: &[String]) -> std::result::Result<(), ValidationError> {
    if countries.iter().any(|c| c.trim().is_empty()) {
        return Err(ValidationError::new("empty_country_name"));
    }

    let mut seen = HashSet::new();
    if !countries.iter().all(|c| seen.insert(c.trim())) {
        return Err(ValidationError::new("duplicate_country_name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DashboardSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.year_offset, 70);
        assert_eq!(settings.selected_countries.len(), 6);
        assert_eq!(settings.row_policy, RowPolicy::Abort);
    }

    #[test]
    fn test_empty_country_list_is_rejected() {
        let settings = DashboardSettings {
            selected_countries: vec![],
            ..DashboardSettings::default()
        };
        assert!(settings.validate().is_err());

        let blank = DashboardSettings {
            selected_countries: vec!["Chad".to_string(), "  ".to_string()],
            ..DashboardSettings::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_duplicate_country_is_rejected() {
        let settings = DashboardSettings {
            selected_countries: vec!["Chad".to_string(), " Chad".to_string()],
            ..DashboardSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_environment_overrides_defaults() -> Result<()> {
        let settings = DashboardSettings::load_from(
            None,
            env(&[
                ("CLIMATE_DASHBOARD_YEAR_OFFSET", "5"),
                ("CLIMATE_DASHBOARD_SELECTED_COUNTRIES", "Chad,Peru"),
                ("CLIMATE_DASHBOARD_ROW_POLICY", "skip"),
                ("UNRELATED_YEAR_OFFSET", "99"),
            ]),
        )?;

        assert_eq!(settings.year_offset, 5);
        assert_eq!(settings.selected_countries, vec!["Chad", "Peru"]);
        assert_eq!(settings.row_policy, RowPolicy::Skip);
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        Ok(())
    }

    #[test]
    fn test_environment_overrides_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "year_offset = 10")?;
        writeln!(file, "selected_countries = [\"Niger\"]")?;
        writeln!(file, "data_dir = \"fixtures\"")?;

        let settings = DashboardSettings::load_from(
            Some(file.path()),
            env(&[
                ("CLIMATE_DASHBOARD_YEAR_OFFSET", "3"),
                ("CLIMATE_DASHBOARD_SELECTED_COUNTRIES", "Chad, Peru"),
            ]),
        )?;

        assert_eq!(settings.year_offset, 3);
        assert_eq!(settings.selected_countries, vec!["Chad", "Peru"]);
        assert_eq!(settings.data_dir, PathBuf::from("fixtures"));
        Ok(())
    }

    #[test]
    fn test_environment_duplicates_fail_validation() {
        let result = DashboardSettings::load_from(
            None,
            env(&[("CLIMATE_DASHBOARD_SELECTED_COUNTRIES", "Chad,Chad")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_keeps_unset_defaults() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "year_offset = 10")?;
        writeln!(file, "row_policy = \"skip\"")?;
        writeln!(file, "selected_countries = [\"Chad\", \"Peru\"]")?;

        let settings = DashboardSettings::load_from(Some(file.path()), env(&[]))?;

        assert_eq!(settings.year_offset, 10);
        assert_eq!(settings.row_policy, RowPolicy::Skip);
        assert_eq!(settings.selected_countries, vec!["Chad", "Peru"]);
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        Ok(())
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let result = DashboardSettings::load(Some(Path::new("no/such/settings.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let settings = DashboardSettings::default()
            .with_data_dir(Some(PathBuf::from("/tmp/climate")))
            .with_row_policy(None);

        assert_eq!(settings.data_dir, PathBuf::from("/tmp/climate"));
        assert_eq!(settings.row_policy, RowPolicy::Abort);
    }
}
