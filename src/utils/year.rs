use crate::error::{ProcessingError, Result};
use crate::utils::constants::YEAR_PREFIX_LEN;

/// Extract the four digit year that prefixes a dataset date
///
/// # Examples
/// ```
/// use climate_dashboard::utils::year_prefix;
///
/// assert_eq!(year_prefix("1743-11-01").unwrap(), "1743");
/// assert!(year_prefix("17").is_err());
/// ```
pub fn year_prefix(date: &str) -> Result<&str> {
    let trimmed = date.trim();

    match trimmed.get(..YEAR_PREFIX_LEN) {
        Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => Ok(year),
        _ => Err(ProcessingError::MalformedDate {
            date: date.to_string(),
        }),
    }
}
