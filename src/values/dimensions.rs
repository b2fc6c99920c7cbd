use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, invalid_format_error, invalid_value_error};

use super::numeric::{check_integer, check_positive};

static DIMENSIONS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^x]+)x([^x]+)$").expect("Failed to compile regex pattern for DIMENSIONS_PATTERN")
});

/// Page dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Creates dimensions from already parsed values
    ///
    /// # Errors
    /// Returns a value error if either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_value_error("width", "0", "must be a positive integer"));
        }
        if height == 0 {
            return Err(invalid_value_error("height", "0", "must be a positive integer"));
        }
        Ok(Dimensions { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Builds dimensions from a width and a height given as text
///
/// Both sides are type checked before either is sign checked.
pub fn make_dimensions(width: &str, height: &str) -> Result<Dimensions> {
    check_integer("width", width)?;
    check_integer("height", height)?;
    let width = check_positive("width", width)?;
    let height = check_positive("height", height)?;

    Dimensions::new(width, height)
}

/// Parses a `WIDTHxHEIGHT` string into dimensions
///
/// The shape is checked before any number is looked at, so `10x` is a format
/// error while `10x2.5` is a type error.
///
/// # Examples
/// ```
/// use bookworm::values::parse_dimensions;
///
/// let dimensions = parse_dimensions("2480x3508").unwrap();
/// assert_eq!((dimensions.width(), dimensions.height()), (2480, 3508));
/// ```
pub fn parse_dimensions(value: &str) -> Result<Dimensions> {
    let captures = DIMENSIONS_PATTERN
        .captures(value.trim())
        .ok_or_else(|| invalid_format_error(value, "WIDTHxHEIGHT"))?;

    make_dimensions(&captures[1], &captures[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_parse_dimensions() {
        let dimensions = parse_dimensions("2550x3300").unwrap();

        assert_eq!(dimensions.width(), 2550);
        assert_eq!(dimensions.height(), 3300);
        assert_eq!(dimensions.to_string(), "2550x3300");
    }

    #[test]
    fn test_malformed_dimensions() {
        for value in ["2550", "2550x", "x3300", "1x2x3", "", "2550 by 3300", "2550X3300"] {
            let error = parse_dimensions(value).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::Format, "input: {value:?}");
        }
    }

    #[test]
    fn test_format_checked_before_numbers() {
        // Negative and fractional, but the shape is wrong first
        let error = parse_dimensions("-2.5").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_non_integer_dimensions() {
        assert_eq!(
            parse_dimensions("10.5x20").unwrap_err().kind(),
            ErrorKind::Type
        );
        assert_eq!(
            parse_dimensions("10xabc").unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_type_checked_on_both_sides_before_sign() {
        // The width is negative but the height is not an integer
        let error = make_dimensions("-10", "2.5").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_non_positive_dimensions() {
        assert_eq!(
            parse_dimensions("0x20").unwrap_err().kind(),
            ErrorKind::Value
        );
        assert_eq!(
            parse_dimensions("20x-1").unwrap_err().kind(),
            ErrorKind::Value
        );
    }
}
