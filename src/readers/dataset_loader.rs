use crate::error::Result;
use crate::models::{GlobalRecord, TemperatureRecord};
use crate::readers::csv_source::RowPolicy;
use crate::readers::{CountryTemperatureReader, GlobalTemperatureReader};
use crate::utils::constants::{COUNTRY_TEMPERATURES_FILE, GLOBAL_TEMPERATURES_FILE};
use crate::utils::progress::ProgressReporter;
use crate::ProcessingError;
use std::path::PathBuf;
use tracing::info;

/// Both input tables, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub countries: Vec<TemperatureRecord>,
    pub global: Vec<GlobalRecord>,
    pub skipped_rows: usize,
}

/// Loads the two fixed-name tables from a data directory
pub struct DatasetLoader {
    data_dir: PathBuf,
    policy: RowPolicy,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            policy: RowPolicy::Abort,
        }
    }

    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn country_path(&self) -> PathBuf {
        self.data_dir.join(COUNTRY_TEMPERATURES_FILE)
    }

    pub fn global_path(&self) -> PathBuf {
        self.data_dir.join(GLOBAL_TEMPERATURES_FILE)
    }

    /// Load both tables, failing before any parsing if either file is absent
    pub fn load(&self, progress: Option<&ProgressReporter>) -> Result<Datasets> {
        let country_path = self.country_path();
        let global_path = self.global_path();

        for path in [&country_path, &global_path] {
            if !path.is_file() {
                return Err(ProcessingError::MissingInput { path: path.clone() });
            }
        }

        if let Some(p) = progress {
            p.set_message("Reading country temperatures...");
        }
        let countries = CountryTemperatureReader::with_row_policy(self.policy)
            .read_records(&country_path)?;

        if let Some(p) = progress {
            p.set_message("Reading global temperatures...");
        }
        let global =
            GlobalTemperatureReader::with_row_policy(self.policy).read_records(&global_path)?;

        info!(
            "Loaded {} country rows and {} global rows from {}",
            countries.rows.len(),
            global.rows.len(),
            self.data_dir.display()
        );

        Ok(Datasets {
            countries: countries.rows,
            global: global.rows,
            skipped_rows: countries.skipped + global.skipped,
        })
    }
}
