use std::{fmt, num::ParseIntError, str::FromStr};

use crate::PslgError;

pub(crate) mod env;

/// How vertex coordinates are rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePrecision {
    /// The shortest decimal text which parses back to the identical `f64`
    #[default]
    RoundTrip,
    /// Exactly this many digits after the decimal point
    Fixed(usize),
}

impl CoordinatePrecision {
    /// Wraps `value` so that it is displayed with this precision
    pub fn display(self, value: f64) -> DisplayCoordinate {
        DisplayCoordinate { value, precision: self }
    }
}

/// Accepts `roundtrip` (or `round-trip`) and a decimal digit count
impl FromStr for CoordinatePrecision {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roundtrip" | "round-trip" => Ok(Self::RoundTrip),
            digits => digits.parse().map(Self::Fixed),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayCoordinate {
    value: f64,
    precision: CoordinatePrecision,
}

impl fmt::Display for DisplayCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            CoordinatePrecision::RoundTrip => write!(f, "{}", self.value),
            CoordinatePrecision::Fixed(digits) => write!(f, "{:.*}", digits, self.value),
        }
    }
}

/// Settings for writing a PSLG
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Rendering of vertex coordinates
    pub precision: CoordinatePrecision,
}

impl WriterConfig {
    /// The default configuration, with any `CIRCLE_PSLG_*` environment overrides applied
    pub fn from_env() -> Result<Self, PslgError> {
        let mut config = Self::default();
        if let Some(precision) = env::writer::precision()? {
            config.precision = precision;
        }
        Ok(config)
    }
}
