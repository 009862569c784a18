//! Validation rules for redeemable catalog entries.
//!
//! A redeemable is identified by its (competition_code, name) pair, both
//! immutable after creation. Only `quantity` and `description` may be
//! patched later, so the same field validators apply to create and update.

use crate::error::CoreError;

/// Maximum length of a redeemable description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validate a competition code (non-empty, no surrounding whitespace).
pub fn validate_competition_code(code: &str) -> Result<(), CoreError> {
    if code.trim().is_empty() {
        return Err(CoreError::Validation(
            "competition_code must not be empty".to_string(),
        ));
    }
    if code != code.trim() {
        return Err(CoreError::Validation(
            "competition_code must not have leading or trailing whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a redeemable name (non-empty, no surrounding whitespace).
pub fn validate_redeemable_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "name must not be empty".to_string(),
        ));
    }
    if name != name.trim() {
        return Err(CoreError::Validation(
            "name must not have leading or trailing whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validate a baseline stock quantity. The baseline must start at zero or
/// above; the effective balance only moves through ledger transactions.
pub fn validate_baseline_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation(format!(
            "quantity must be >= 0, got {quantity}"
        )));
    }
    Ok(())
}

/// Validate an optional description against the length cap.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_competition_code ------------------------------------------

    #[test]
    fn accepts_simple_code() {
        assert!(validate_competition_code("hackuta-2026").is_ok());
    }

    #[test]
    fn rejects_empty_code() {
        assert!(validate_competition_code("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_code() {
        assert!(validate_competition_code("   ").is_err());
    }

    #[test]
    fn rejects_padded_code() {
        assert!(validate_competition_code(" x ").is_err());
    }

    // -- validate_redeemable_name -------------------------------------------

    #[test]
    fn accepts_simple_name() {
        assert!(validate_redeemable_name("tshirt").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_redeemable_name("").is_err());
    }

    #[test]
    fn rejects_padded_name() {
        assert!(validate_redeemable_name("tshirt ").is_err());
    }

    // -- validate_baseline_quantity -----------------------------------------

    #[test]
    fn accepts_zero_quantity() {
        assert!(validate_baseline_quantity(0).is_ok());
    }

    #[test]
    fn accepts_positive_quantity() {
        assert!(validate_baseline_quantity(500).is_ok());
    }

    #[test]
    fn rejects_negative_quantity() {
        assert!(validate_baseline_quantity(-1).is_err());
    }

    // -- validate_description -----------------------------------------------

    #[test]
    fn accepts_short_description() {
        assert!(validate_description("A free shirt").is_ok());
    }

    #[test]
    fn accepts_description_at_limit() {
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
    }

    #[test]
    fn rejects_description_over_limit() {
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }
}
