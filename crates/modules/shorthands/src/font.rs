//! The `font` shorthand:
//! `[<style> || <variant> || <weight>] <size> [/ <line-height>] <family>`.

use style_tokens::{TokenStream, ValueToken};
use style_values::{StyleMap, Value};

use crate::matchers;
use crate::ExpandError;

/// A token legal before the font size.
enum Lead {
    Style(String),
    Weight(Value),
    Variant(String),
    /// `normal` resets whichever of the three is unset; carrying it
    /// explicitly is unnecessary since all three default to `normal`.
    Normal,
}

fn lead(token: &ValueToken) -> Option<Lead> {
    match token {
        // A bare number ahead of the size can only be a weight.
        ValueToken::Number(number) if (1.0..=1000.0).contains(number) => {
            Some(Lead::Weight(Value::Number(f64::from(*number))))
        }
        ValueToken::Ident(word) => {
            let lower = word.to_ascii_lowercase();
            match lower.as_str() {
                "italic" | "oblique" => Some(Lead::Style(lower)),
                "bold" | "bolder" | "lighter" => Some(Lead::Weight(Value::String(lower))),
                "small-caps" => Some(Lead::Variant(lower)),
                "normal" => Some(Lead::Normal),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Font size and line height: a dimension or percentage, never a keyword.
fn size(token: &ValueToken) -> Option<Value> {
    match token {
        ValueToken::Dimension { .. } | ValueToken::Percentage(_) => {
            matchers::dimension_or_number(token)
        }
        _ => None,
    }
}

/// Expand `font` into `fontStyle`, `fontWeight`, `fontVariant`, `fontSize`,
/// `fontFamily`, and (when the `/ <line-height>` form is used) `lineHeight`.
pub fn expand_font(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let mut font_style: Option<String> = None;
    let mut weight: Option<Value> = None;
    let mut variant: Option<String> = None;
    while let Some(token) = stream.take_if(lead) {
        match token {
            Lead::Style(value) => font_style = Some(value),
            Lead::Weight(value) => weight = Some(value),
            Lead::Variant(value) => variant = Some(value),
            Lead::Normal => {}
        }
    }

    let font_size = stream
        .take_if(size)
        .ok_or_else(|| ExpandError::missing(property))?;

    let slash = stream.take_if(|token| match token {
        ValueToken::Delim('/') => Some(()),
        _ => None,
    });
    let line_height = if slash.is_some() {
        let height = stream
            .take_if(|token| match token {
                ValueToken::Number(number) => Some(Value::Number(f64::from(*number))),
                _ => size(token),
            })
            .ok_or_else(|| ExpandError::missing(property))?;
        Some(height)
    } else {
        None
    };

    let family = family(stream, property)?;

    let mut styles = StyleMap::from([
        (
            "fontStyle".to_owned(),
            font_style.map_or_else(|| Value::string("normal"), Value::String),
        ),
        (
            "fontWeight".to_owned(),
            weight.unwrap_or_else(|| Value::string("normal")),
        ),
        (
            "fontVariant".to_owned(),
            variant.map_or_else(|| Value::string("normal"), Value::String),
        ),
        ("fontSize".to_owned(), font_size),
        ("fontFamily".to_owned(), family),
    ]);
    if let Some(height) = line_height {
        styles.insert("lineHeight".to_owned(), height);
    }
    Ok(styles)
}

/// The family list: identifier runs or quoted strings, comma-separated.
fn family(stream: &mut TokenStream, property: &str) -> Result<Value, ExpandError> {
    let mut families: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    while let Some(token) = stream.advance() {
        match token {
            ValueToken::Ident(word) => current.push(word),
            ValueToken::QuotedString(text) => current.push(text),
            ValueToken::Comma => {
                if current.is_empty() {
                    return Err(ExpandError::unexpected(property));
                }
                families.push(current.join(" "));
                current.clear();
            }
            _ => return Err(ExpandError::unexpected(property)),
        }
    }
    if !current.is_empty() {
        families.push(current.join(" "));
    }
    if families.is_empty() {
        return Err(ExpandError::missing(property));
    }
    Ok(Value::String(families.join(", ")))
}
