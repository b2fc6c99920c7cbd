use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, invalid_type_error, invalid_value_error};

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").expect("Failed to compile regex pattern for INTEGER_PATTERN")
});

/// Checks that `raw` is written as an integer
///
/// # Errors
/// Returns a type error for fractions, words and empty input
pub(crate) fn check_integer(name: &str, raw: &str) -> Result<()> {
    if INTEGER_PATTERN.is_match(raw.trim()) {
        Ok(())
    } else {
        Err(invalid_type_error(name, raw))
    }
}

/// Checks that an integer-shaped `raw` is positive and fits a `u32`
///
/// Callers must run [`check_integer`] first.
pub(crate) fn check_positive(name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value <= 0 => Err(invalid_value_error(
            name,
            raw,
            "must be a positive integer",
        )),
        Ok(value) => u32::try_from(value)
            .map_err(|_| invalid_value_error(name, raw, "is too large")),
        // Shape already checked, so only the magnitude can be wrong
        Err(_) if trimmed.starts_with('-') => Err(invalid_value_error(
            name,
            raw,
            "must be a positive integer",
        )),
        Err(_) => Err(invalid_value_error(name, raw, "is too large")),
    }
}

/// Parses a positive integer written as text
///
/// The type check always runs before the sign check, so `-2.5` is a type
/// error rather than a value error.
///
/// # Examples
/// ```
/// use bookworm::values::parse_positive_integer;
/// use bookworm::prelude::ErrorKind;
///
/// assert_eq!(parse_positive_integer("resolution", "600").unwrap(), 600);
/// assert_eq!(parse_positive_integer("resolution", "0").unwrap_err().kind(), ErrorKind::Value);
/// assert_eq!(parse_positive_integer("resolution", "-2.5").unwrap_err().kind(), ErrorKind::Type);
/// ```
pub fn parse_positive_integer(name: &str, raw: &str) -> Result<u32> {
    check_integer(name, raw)?;
    check_positive(name, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("v", "1").unwrap(), 1);
        assert_eq!(parse_positive_integer("v", " 300 ").unwrap(), 300);
        assert_eq!(parse_positive_integer("v", "+72").unwrap(), 72);
    }

    #[test]
    fn test_type_errors() {
        for raw in ["2.5", "-2.5", "0.0", "abc", "", "1e3", "12px"] {
            let error = parse_positive_integer("v", raw).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Type, "input: {raw:?}");
        }
    }

    #[test]
    fn test_value_errors() {
        for raw in ["0", "-1", "-600", "4294967296", "-99999999999999999999999"] {
            let error = parse_positive_integer("v", raw).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Value, "input: {raw:?}");
        }
    }
}
