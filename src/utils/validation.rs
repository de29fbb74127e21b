//! Validation utilities

use crate::types::*;

/// Validate a single report label
pub fn validate_label(name: &str, value: &str) -> ReconResult<()> {
    if value.trim().is_empty() {
        return Err(ReconError::Validation(format!(
            "The {} label cannot be empty",
            name
        )));
    }

    if value.len() > 100 {
        return Err(ReconError::Validation(format!(
            "The {} label cannot exceed 100 characters",
            name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label_accepts_plain_text() {
        assert!(validate_label("bank", "Bank Statement").is_ok());
    }

    #[test]
    fn test_validate_label_rejects_blank() {
        assert!(validate_label("bank", "   ").is_err());
    }

    #[test]
    fn test_validate_label_rejects_overlong() {
        let long = "x".repeat(101);
        assert!(validate_label("bank", &long).is_err());
    }
}
