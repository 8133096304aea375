// Hex payload input validation
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Hex string cannot be empty")]
    EmptyInput,
    #[error("Hex string may only contain the characters 0-9, A-F and spaces")]
    InvalidCharacters,
}

/// Check an operator-supplied hex payload before dispatch. Outer whitespace
/// is trimmed; internal whitespace is preserved, the decoder service strips
/// it during normalization.
pub fn validate_hex(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_hexdigit() || c.is_whitespace())
    {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hex_digits() {
        assert_eq!(validate_hex("A1B2C3").unwrap(), "A1B2C3");
        assert_eq!(validate_hex("deadBEEF0123").unwrap(), "deadBEEF0123");
    }

    #[test]
    fn test_trims_outer_whitespace_only() {
        assert_eq!(validate_hex("  1A FF 0D 00  ").unwrap(), "1A FF 0D 00");
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        assert_eq!(validate_hex("ZZ"), Err(ValidationError::InvalidCharacters));
        assert_eq!(
            validate_hex("1AFF0D0G"),
            Err(ValidationError::InvalidCharacters)
        );
        assert_eq!(
            validate_hex("0x1AFF"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(validate_hex(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate_hex("   \t "), Err(ValidationError::EmptyInput));
    }
}
