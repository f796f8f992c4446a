use crate::error::{ProcessingError, Result};
use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// What to do with a row that cannot be parsed.
///
/// The same policy is applied to every dataset of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Fail the whole run on the first malformed row
    #[default]
    Abort,
    /// Log the row and leave it out
    Skip,
}

impl std::str::FromStr for RowPolicy {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(RowPolicy::Abort),
            "skip" => Ok(RowPolicy::Skip),
            other => Err(ProcessingError::InvalidSetting(format!(
                "Unknown row policy '{}', expected 'abort' or 'skip'",
                other
            ))),
        }
    }
}

/// Rows read from one CSV file, plus how many were dropped.
#[derive(Debug)]
pub struct ParsedRows<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

/// Header-driven CSV parsing shared by both dataset readers
pub struct CsvSource<'a> {
    label: &'a str,
    required_columns: &'a [&'a str],
    policy: RowPolicy,
}

impl<'a> CsvSource<'a> {
    pub fn new(label: &'a str, required_columns: &'a [&'a str], policy: RowPolicy) -> Self {
        Self {
            label,
            required_columns,
            policy,
        }
    }

    /// Read and decode a file, then parse it
    pub fn read_path<Row, T, F>(&self, path: &Path, convert: F) -> Result<ParsedRows<T>>
    where
        Row: DeserializeOwned,
        F: Fn(Row) -> Result<T>,
    {
        if !path.is_file() {
            return Err(ProcessingError::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        let content = decode_input(&bytes, self.label);
        self.parse_str(&content, convert)
    }

    /// Parse CSV text with a header row into `T`s, one per data row
    pub fn parse_str<Row, T, F>(&self, content: &str, convert: F) -> Result<ParsedRows<T>>
    where
        Row: DeserializeOwned,
        F: Fn(Row) -> Result<T>,
    {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        self.check_headers(&headers)?;

        let mut rows = Vec::new();
        let mut skipped = 0;
        let mut record = StringRecord::new();

        loop {
            let outcome = match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    let line = record.position().map_or(0, |p| p.line());
                    record
                        .deserialize::<Row>(Some(&headers))
                        .map_err(|e| self.malformed(line, e.to_string()))
                        .and_then(|row| {
                            convert(row).map_err(|e| self.malformed(line, e.to_string()))
                        })
                }
                Err(e) => {
                    let unequal = match e.kind() {
                        ErrorKind::UnequalLengths {
                            pos,
                            expected_len,
                            len,
                        } => Some((pos.as_ref().map_or(0, |p| p.line()), *expected_len, *len)),
                        _ => None,
                    };
                    // Anything but a short or long row is an I/O level failure
                    let Some((line, expected_len, len)) = unequal else {
                        return Err(e.into());
                    };
                    Err(self.malformed(
                        line,
                        format!("expected {} fields, found {}", expected_len, len),
                    ))
                }
            };

            match outcome {
                Ok(row) => rows.push(row),
                Err(err) => match self.policy {
                    RowPolicy::Abort => return Err(err),
                    RowPolicy::Skip => {
                        warn!("Skipping row: {}", err);
                        skipped += 1;
                    }
                },
            }
        }

        debug!(
            "Parsed {} rows from {} ({} skipped)",
            rows.len(),
            self.label,
            skipped
        );

        Ok(ParsedRows { rows, skipped })
    }

    fn check_headers(&self, headers: &StringRecord) -> Result<()> {
        for column in self.required_columns {
            if !headers.iter().any(|h| h == *column) {
                return Err(self.malformed(1, format!("missing required column '{}'", column)));
            }
        }
        Ok(())
    }

    fn malformed(&self, line: u64, message: String) -> ProcessingError {
        ProcessingError::MalformedRow {
            file: self.label.to_string(),
            line,
            message,
        }
    }
}

/// Decode file bytes as UTF-8, falling back to Windows-1252 for legacy exports
pub fn decode_input<'b>(bytes: &'b [u8], label: &str) -> Cow<'b, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            warn!("{} is not valid UTF-8, decoding as Windows-1252", label);
            encoding_rs::WINDOWS_1252
                .decode_without_bom_handling(bytes)
                .0
        }
    }
}
