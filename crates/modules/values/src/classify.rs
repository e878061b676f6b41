//! Raw value classification for non-shorthand declarations.
//!
//! Recognition ladder, first match wins: dimensioned length, bare number
//! (with an optional redundant `px` marker), boolean literal, `null`,
//! `undefined`, opaque string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::Diagnostics;
use crate::value::{Dimension, LengthUnit, Value};

// Keep these patterns in sync with the token matchers in style_shorthands.
#[allow(clippy::expect_used, reason = "static pattern, checked by tests")]
static LENGTH_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d*\.?)\d+)(px|%|ch|em|ex|rem|vh|vw|vmin|vmax|cm|mm|in|pc|pt)$")
        .expect("length pattern compiles")
});
#[allow(clippy::expect_used, reason = "static pattern, checked by tests")]
static NUMBER_OR_LENGTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d*\.)?\d+(?:e[+-]?\d+)?)(?:px)?$").expect("number pattern compiles")
});

/// Classify the raw text of one declaration's value.
///
/// Never fails: anything outside the recognized grammar falls back to the
/// original string, unchanged. Unit-mismatch advisories from `diagnostics`
/// are logged only and never affect the returned value.
pub fn classify(property: &str, value: &str, diagnostics: &Diagnostics) -> Value {
    diagnostics.check_units(property, value);

    if let Some(captures) = LENGTH_UNIT_RE.captures(value)
        && let (Some(number), Some(unit)) = (captures.get(1), captures.get(2))
        && let Some(unit) = LengthUnit::parse(unit.as_str())
    {
        return Value::Dimension(Dimension {
            value: number.as_str().to_owned(),
            unit,
        });
    }

    if let Some(captures) = NUMBER_OR_LENGTH_RE.captures(value)
        && let Some(number) = captures.get(1)
        && let Ok(number) = number.as_str().parse::<f64>()
    {
        return Value::Number(number);
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return Value::Bool(value.eq_ignore_ascii_case("true"));
    }
    if value.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if value.eq_ignore_ascii_case("undefined") {
        return Value::Undefined;
    }

    Value::String(value.to_owned())
}
