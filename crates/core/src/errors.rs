//! Core error types for the daily budget engine.
//!
//! The allocation engine itself never fails; these errors are produced by
//! strict validation call sites and by the service layer, where repository
//! implementations convert their storage-specific failures into this type.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for budget operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_error_messages() {
        let err = Error::Validation(ValidationError::InvalidBudget(
            "start date must be before end date".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid budget: start date must be before end date"
        );

        let err = Error::NotFound("budget b1".to_string());
        assert_eq!(String::from(err), "Record not found: budget b1");
    }

    #[test]
    fn test_parse_errors_lift_into_validation() {
        let decimal_err = rust_decimal::Decimal::from_str("twelve").unwrap_err();
        let err: Error = decimal_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));

        let date_err = NaiveDate::parse_from_str("2024-13-45", "%Y-%m-%d").unwrap_err();
        let err: Error = date_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DateTimeParse(_))
        ));
    }
}
