//! Unit conversion over static factor tables
//!
//! Each table maps a unit to the number of canonical base units (meter,
//! kilogram) in one of that unit.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("km", 1000.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];

const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 0.001),
    ("mg", 0.000001),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Length,
    Weight,
}

/// Conversion requests that cannot be served. These are reported to the user
/// as plain messages, never as fatal errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Unsupported conversion type: {0}")]
    UnsupportedType(String),

    #[error("Unsupported units for {0} conversion")]
    UnsupportedUnits(Quantity),
}

impl Quantity {
    fn factors(self) -> &'static [(&'static str, f64)] {
        match self {
            Quantity::Length => LENGTH_FACTORS,
            Quantity::Weight => WEIGHT_FACTORS,
        }
    }

    /// Factor expressing one `unit` in the base unit
    pub fn factor(self, unit: &str) -> Option<f64> {
        self.factors()
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// `value` in `from_unit` is `value * factor(from_unit)` base units, which
    /// is then divided by `factor(to_unit)`. The factor direction is
    /// deliberate: `1 km` converts to `1000 m`, not `0.001 m`.
    pub fn convert(self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
        match (self.factor(from_unit), self.factor(to_unit)) {
            (Some(from), Some(to)) => Ok(value * from / to),
            _ => Err(ConversionError::UnsupportedUnits(self)),
        }
    }
}

impl FromStr for Quantity {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Quantity::Length),
            "weight" => Ok(Quantity::Weight),
            other => Err(ConversionError::UnsupportedType(other.to_string())),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Length => write!(f, "length"),
            Quantity::Weight => write!(f, "weight"),
        }
    }
}

/// Convert `value` between two units of the quantity named by `kind`.
pub fn convert(kind: &str, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    kind.parse::<Quantity>()?.convert(value, from_unit, to_unit)
}
