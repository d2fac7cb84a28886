//! Common validation utilities.

use validator::ValidationError;

use crate::dates::{parse_date_list, DateParseError};

/// Validates that a text value contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a comma-separated list of proposed dates.
pub fn validate_date_list(value: &str) -> Result<(), ValidationError> {
    match parse_date_list(value) {
        Ok(_) => Ok(()),
        Err(DateParseError::Empty) => {
            let mut err = ValidationError::new("dates_empty");
            err.message = Some("At least one date must be proposed".into());
            Err(err)
        }
        Err(DateParseError::Invalid(raw)) => {
            let mut err = ValidationError::new("dates_invalid");
            err.message = Some(format!("Invalid date: {}", raw).into());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Ada").is_ok());
        assert!(validate_not_blank(" Ada ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn test_validate_not_blank_error_message() {
        let err = validate_not_blank("").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Value must not be blank");
    }

    #[test]
    fn test_validate_date_list() {
        assert!(validate_date_list("2024-03-05,2024-03-01").is_ok());
        assert!(validate_date_list("").is_err());
    }

    #[test]
    fn test_validate_date_list_error_message() {
        let err = validate_date_list("2024-03-05,someday").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Invalid date: someday");

        let err = validate_date_list(",").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "At least one date must be proposed"
        );
    }
}
