//! Shared validation utilities
//!
//! Pure input checks applied by every command and query before any store
//! access. Each check either passes or produces one [`ValidationError`]
//! kind; callers apply them in a fixed order so the first failure wins.

use chrono::NaiveDate;
use thiserror::Error;

/// Accepted audit type values
pub const VALID_AUDIT_TYPES: &[&str] = &["internal", "external"];

/// Lowest year accepted by year-scoped operations
pub const MIN_YEAR: i32 = 1900;

/// Highest year accepted by year-scoped operations
pub const MAX_YEAR: i32 = 2100;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 255;

/// Input validation failures, reported before the store is touched
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("audit_type must be one of: internal, external")]
    InvalidEnum,

    #[error("title cannot be empty")]
    EmptyField,

    #[error("title cannot exceed {MAX_TITLE_LENGTH} characters")]
    FieldTooLong,

    #[error("year must be between {MIN_YEAR} and {MAX_YEAR}")]
    OutOfRange,

    #[error("start_date cannot be after end_date")]
    InvalidRange,

    #[error("date must be in YYYY-MM-DD format")]
    MalformedDate,

    #[error("date is not a valid calendar date")]
    InvalidDate,

    #[error("id must be a positive integer")]
    InvalidIdentifier,

    #[error("at least one field must be provided for update")]
    NoFieldsToUpdate,
}

/// Validate an audit type string against the fixed enumeration
pub fn validate_audit_type(audit_type: &str) -> Result<(), ValidationError> {
    if !VALID_AUDIT_TYPES.contains(&audit_type) {
        return Err(ValidationError::InvalidEnum);
    }
    Ok(())
}

/// Validate a title field
///
/// # Rules
/// - Must not be empty after trimming whitespace
/// - Must not exceed [`MAX_TITLE_LENGTH`] characters
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyField);
    }

    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::FieldTooLong);
    }

    Ok(())
}

/// Validate a year parameter against [MIN_YEAR, MAX_YEAR]
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::OutOfRange);
    }
    Ok(())
}

/// Validate that a date range is not inverted
///
/// Either bound may be absent; the check only applies when both are given.
pub fn validate_date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return Err(ValidationError::InvalidRange);
        }
    }
    Ok(())
}

/// Validate a date path parameter and parse it
///
/// The string must match the literal `YYYY-MM-DD` pattern and decompose
/// into a real calendar date (Feb 30, month 13 and friends are rejected).
pub fn validate_date_string(date_str: &str) -> Result<NaiveDate, ValidationError> {
    if !matches_date_pattern(date_str) {
        return Err(ValidationError::MalformedDate);
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Validate an identifier path parameter (strictly positive)
pub fn validate_audit_id(id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidIdentifier);
    }
    Ok(())
}

/// Check the literal `YYYY-MM-DD` shape: 4 digits, hyphen, 2 digits,
/// hyphen, 2 digits
fn matches_date_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Audit type validation tests
    #[test]
    fn test_validate_audit_type_valid() {
        assert!(validate_audit_type("internal").is_ok());
        assert!(validate_audit_type("external").is_ok());
    }

    #[test]
    fn test_validate_audit_type_invalid() {
        assert_eq!(validate_audit_type(""), Err(ValidationError::InvalidEnum));
        assert_eq!(validate_audit_type("Internal"), Err(ValidationError::InvalidEnum));
        assert_eq!(validate_audit_type("review"), Err(ValidationError::InvalidEnum));
    }

    // Title validation tests
    #[test]
    fn test_validate_title_valid() {
        assert!(validate_title("Q1 compliance review").is_ok());
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_validate_title_empty() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyField));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyField));
        assert_eq!(validate_title("\t\n"), Err(ValidationError::EmptyField));
    }

    #[test]
    fn test_validate_title_too_long() {
        let long_title = "a".repeat(256);
        assert_eq!(validate_title(&long_title), Err(ValidationError::FieldTooLong));
    }

    // Year validation tests
    #[test]
    fn test_validate_year_bounds() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(2025).is_ok());
        assert!(validate_year(2100).is_ok());
        assert_eq!(validate_year(1899), Err(ValidationError::OutOfRange));
        assert_eq!(validate_year(2101), Err(ValidationError::OutOfRange));
        assert_eq!(validate_year(-5), Err(ValidationError::OutOfRange));
    }

    // Date range validation tests
    #[test]
    fn test_validate_date_range_ordered() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1);
        let end = NaiveDate::from_ymd_opt(2025, 12, 31);
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
    }

    #[test]
    fn test_validate_date_range_inverted() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1);
        let end = NaiveDate::from_ymd_opt(2025, 1, 1);
        assert_eq!(validate_date_range(start, end), Err(ValidationError::InvalidRange));
    }

    #[test]
    fn test_validate_date_range_partial_bounds() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1);
        assert!(validate_date_range(date, None).is_ok());
        assert!(validate_date_range(None, date).is_ok());
        assert!(validate_date_range(None, None).is_ok());
    }

    // Date string validation tests
    #[test]
    fn test_validate_date_string_valid() {
        assert_eq!(
            validate_date_string("2025-01-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
        // leap day
        assert!(validate_date_string("2024-02-29").is_ok());
    }

    #[test]
    fn test_validate_date_string_malformed() {
        assert_eq!(validate_date_string("2025-1-15"), Err(ValidationError::MalformedDate));
        assert_eq!(validate_date_string("15-01-2025"), Err(ValidationError::MalformedDate));
        assert_eq!(validate_date_string("2025/01/15"), Err(ValidationError::MalformedDate));
        assert_eq!(validate_date_string("not-a-date"), Err(ValidationError::MalformedDate));
        assert_eq!(validate_date_string(""), Err(ValidationError::MalformedDate));
    }

    #[test]
    fn test_validate_date_string_impossible_dates() {
        assert_eq!(validate_date_string("2025-02-30"), Err(ValidationError::InvalidDate));
        assert_eq!(validate_date_string("2025-13-01"), Err(ValidationError::InvalidDate));
        assert_eq!(validate_date_string("2025-00-10"), Err(ValidationError::InvalidDate));
        // not a leap year
        assert_eq!(validate_date_string("2025-02-29"), Err(ValidationError::InvalidDate));
    }

    // Identifier validation tests
    #[test]
    fn test_validate_audit_id() {
        assert!(validate_audit_id(1).is_ok());
        assert!(validate_audit_id(i64::MAX).is_ok());
        assert_eq!(validate_audit_id(0), Err(ValidationError::InvalidIdentifier));
        assert_eq!(validate_audit_id(-7), Err(ValidationError::InvalidIdentifier));
    }
}
