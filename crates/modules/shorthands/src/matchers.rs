//! Token matchers shared by the expansion functions.
//!
//! Each matcher inspects one token and, when it fits, produces the
//! classified value the longhand should carry. Matchers compose with
//! `TokenStream::take_if`.

use style_tokens::ValueToken;
use style_values::{Dimension, LengthUnit, Value};

/// Functions whose results are usable wherever a color is expected.
const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Border line styles per CSS Backgrounds & Borders.
pub const BORDER_STYLE_KEYWORDS: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// `<length> | <percentage> | <number>`.
pub fn dimension_or_number(token: &ValueToken) -> Option<Value> {
    match token {
        ValueToken::Number(number) => Some(Value::Number(f64::from(*number))),
        ValueToken::Dimension { value, unit } => LengthUnit::parse(unit)
            .map(|unit| Value::Dimension(Dimension::new(*value, unit))),
        ValueToken::Percentage(points) => Some(Value::Dimension(Dimension::new(
            *points,
            LengthUnit::Percent,
        ))),
        _ => None,
    }
}

/// Box side value: a dimension, a number, or the `auto` keyword.
pub fn box_side(token: &ValueToken) -> Option<Value> {
    if let ValueToken::Ident(word) = token
        && word.eq_ignore_ascii_case("auto")
    {
        return Some(Value::string("auto"));
    }
    dimension_or_number(token)
}

/// A bare number token.
pub fn number(token: &ValueToken) -> Option<f64> {
    match token {
        ValueToken::Number(number) => Some(f64::from(*number)),
        _ => None,
    }
}

/// Any identifier, passed through as a string value.
pub fn ident(token: &ValueToken) -> Option<Value> {
    match token {
        ValueToken::Ident(word) => Some(Value::String(word.clone())),
        _ => None,
    }
}

/// An identifier drawn from a fixed keyword set (case-insensitive). The
/// returned value keeps the author's spelling.
pub fn keyword_from(set: &'static [&'static str]) -> impl Fn(&ValueToken) -> Option<Value> {
    move |token| match token {
        ValueToken::Ident(word)
            if set.iter().any(|keyword| word.eq_ignore_ascii_case(keyword)) =>
        {
            Some(Value::String(word.clone()))
        }
        _ => None,
    }
}

/// A color: named keyword, hash, or color function call.
pub fn color(token: &ValueToken) -> Option<Value> {
    match token {
        ValueToken::Ident(word) => Some(Value::String(word.clone())),
        ValueToken::Hash(text) => Some(Value::String(format!("#{text}"))),
        ValueToken::Function { name, raw }
            if COLOR_FUNCTIONS
                .iter()
                .any(|function| name.eq_ignore_ascii_case(function)) =>
        {
            Some(Value::String(raw.clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_matcher_accepts_the_unit_vocabulary_only() {
        let px = ValueToken::Dimension {
            value: 10.0,
            unit: "px".to_owned(),
        };
        assert_eq!(
            dimension_or_number(&px),
            Some(Value::Dimension(Dimension::new(10.0, LengthUnit::Px)))
        );
        let fr = ValueToken::Dimension {
            value: 1.0,
            unit: "fr".to_owned(),
        };
        assert_eq!(dimension_or_number(&fr), None);
    }

    #[test]
    fn border_style_set_matches_case_insensitively() {
        let matcher = keyword_from(BORDER_STYLE_KEYWORDS);
        assert_eq!(
            matcher(&ValueToken::Ident("Dashed".to_owned())),
            Some(Value::string("Dashed"))
        );
        assert_eq!(matcher(&ValueToken::Ident("squiggly".to_owned())), None);
    }

    #[test]
    fn color_matcher_covers_keywords_hashes_and_functions() {
        assert_eq!(
            color(&ValueToken::Ident("red".to_owned())),
            Some(Value::string("red"))
        );
        assert_eq!(
            color(&ValueToken::Hash("888".to_owned())),
            Some(Value::string("#888"))
        );
        assert_eq!(
            color(&ValueToken::Function {
                name: "rgb".to_owned(),
                raw: "rgb(1, 2, 3)".to_owned(),
            }),
            Some(Value::string("rgb(1, 2, 3)"))
        );
        assert_eq!(
            color(&ValueToken::Function {
                name: "calc".to_owned(),
                raw: "calc(1px + 2px)".to_owned(),
            }),
            None
        );
    }
}
