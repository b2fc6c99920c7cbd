use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, invalid_value_error};

use super::numeric::parse_positive_integer;

/// Units a resolution is expressed in
///
/// The names match the `-units` values understood by `convert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionUnits {
    PixelsPerInch,
    PixelsPerCentimeter,
}

impl ResolutionUnits {
    /// Every recognised unit, in the order they are listed to users
    pub const ALL: [ResolutionUnits; 2] = [
        ResolutionUnits::PixelsPerInch,
        ResolutionUnits::PixelsPerCentimeter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionUnits::PixelsPerInch => "PixelsPerInch",
            ResolutionUnits::PixelsPerCentimeter => "PixelsPerCentimeter",
        }
    }
}

impl FromStr for ResolutionUnits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResolutionUnits::ALL
            .into_iter()
            .find(|units| units.as_str() == s)
            .ok_or_else(|| {
                invalid_value_error(
                    "units",
                    s,
                    "must be one of PixelsPerInch, PixelsPerCentimeter",
                )
            })
    }
}

impl fmt::Display for ResolutionUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive image resolution with its units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    value: u32,
    units: ResolutionUnits,
}

impl Resolution {
    /// Creates a resolution from an already parsed value
    ///
    /// # Errors
    /// Returns a value error if `value` is zero
    pub fn new(value: u32, units: ResolutionUnits) -> Result<Self> {
        if value == 0 {
            return Err(invalid_value_error(
                "resolution",
                "0",
                "must be a positive integer",
            ));
        }
        Ok(Resolution { value, units })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn units(&self) -> ResolutionUnits {
        self.units
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units)
    }
}

/// Builds a resolution from user input
///
/// Checks run in a fixed order: the value must be an integer (type error),
/// then positive (value error), then the unit name must be recognised
/// (value error).
///
/// # Examples
/// ```
/// use bookworm::values::{make_resolution, ResolutionUnits};
///
/// let resolution = make_resolution("600", "PixelsPerInch").unwrap();
/// assert_eq!(resolution.value(), 600);
/// assert_eq!(resolution.units(), ResolutionUnits::PixelsPerInch);
/// ```
pub fn make_resolution(value: &str, unit_name: &str) -> Result<Resolution> {
    let value = parse_positive_integer("resolution", value)?;
    let units = unit_name.parse::<ResolutionUnits>()?;

    Resolution::new(value, units)
}
