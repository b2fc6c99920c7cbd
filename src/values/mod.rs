//! Validated numeric values
//!
//! This module contains the resolution and page dimension types handed to the
//! action factories. They can only be built through validating constructors.

mod dimensions;
mod numeric;
mod resolution;

pub use dimensions::{Dimensions, make_dimensions, parse_dimensions};
pub use numeric::parse_positive_integer;
pub use resolution::{Resolution, ResolutionUnits, make_resolution};
