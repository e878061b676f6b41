//! Value types produced by classification and shorthand expansion.

use std::collections::HashMap;
use std::fmt;

/// Mapping from camelCased longhand property names (or verbatim `--custom`
/// names) to classified values. Last write wins on duplicate keys, matching
/// standard source-order behavior for duplicate declarations.
pub type StyleMap = HashMap<String, Value>;

/// A classified style value.
///
/// Mirrors the JavaScript value space of an inline style object: numbers,
/// booleans, `null`, `undefined`, opaque strings, and `{value, unit}` pairs
/// for dimensioned lengths.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Null,
    Undefined,
    String(String),
    Dimension(Dimension),
}

impl Value {
    /// Shorthand constructor for string values.
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(formatter, "{}", format_number(*number)),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Null => write!(formatter, "null"),
            Self::Undefined => write!(formatter, "undefined"),
            Self::String(text) => write!(formatter, "{text}"),
            Self::Dimension(dimension) => write!(formatter, "{dimension}"),
        }
    }
}

/// A numeric value paired with a unit of measure.
///
/// The numeric part is kept as written in the source (`"10px"` keeps `"10"`,
/// not `10.0`), so re-stringifying a classified value round-trips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    pub value: String,
    pub unit: LengthUnit,
}

impl Dimension {
    /// Build a dimension from a numeric token value, formatting the number
    /// the way it would appear in CSS source (no trailing `.0`).
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self {
            value: value.to_string(),
            unit,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.value, self.unit)
    }
}

/// The fixed unit vocabulary recognized for dimensioned lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Percent,
    Ch,
    Em,
    Ex,
    Rem,
    Vh,
    Vw,
    Vmin,
    Vmax,
    Cm,
    Mm,
    In,
    Pc,
    Pt,
}

impl LengthUnit {
    /// Parse a unit name, case-insensitively. Returns `None` for units
    /// outside the supported vocabulary.
    pub fn parse(unit: &str) -> Option<Self> {
        let lower = unit.to_ascii_lowercase();
        let parsed = match lower.as_str() {
            "px" => Self::Px,
            "%" => Self::Percent,
            "ch" => Self::Ch,
            "em" => Self::Em,
            "ex" => Self::Ex,
            "rem" => Self::Rem,
            "vh" => Self::Vh,
            "vw" => Self::Vw,
            "vmin" => Self::Vmin,
            "vmax" => Self::Vmax,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "in" => Self::In,
            "pc" => Self::Pc,
            "pt" => Self::Pt,
            _ => return None,
        };
        Some(parsed)
    }

    /// Canonical lowercase spelling of the unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Ch => "ch",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Rem => "rem",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pc => "pc",
            Self::Pt => "pt",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Format a number the way JavaScript stringifies it: integral values print
/// without a fractional part.
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{number:.0}")
    } else {
        number.to_string()
    }
}
