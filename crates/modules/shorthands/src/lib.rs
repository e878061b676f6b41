//! Shorthand property expansion.
//!
//! Maps each supported shorthand property to a function that consumes the
//! declaration's token stream and produces the equivalent longhand
//! declarations, encoding that property family's grammar: value counts,
//! defaults for omitted longhands, and how repeated values spread onto
//! edges and corners.

#![forbid(unsafe_code)]

use std::fmt;

use style_tokens::TokenStream;
use style_values::StyleMap;

mod border;
mod edges;
mod flex;
mod font;
mod matchers;
mod text_decoration;

/// One shorthand's expansion rule. `property` is the camelCased shorthand
/// name, used for longhand key construction and error reporting.
pub type Expansion = fn(&mut TokenStream, &str) -> Result<StyleMap, ExpandError>;

/// Grammar mismatch while expanding a shorthand value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandError {
    /// A token the property's grammar has no place for.
    UnexpectedToken { property: String },
    /// The grammar requires a value that is absent.
    MissingValue { property: String },
}

impl ExpandError {
    fn unexpected(property: &str) -> Self {
        Self::UnexpectedToken {
            property: property.to_owned(),
        }
    }

    fn missing(property: &str) -> Self {
        Self::MissingValue {
            property: property.to_owned(),
        }
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { property } => {
                write!(formatter, "unexpected token in \"{property}\" shorthand")
            }
            Self::MissingValue { property } => {
                write!(formatter, "missing value in \"{property}\" shorthand")
            }
        }
    }
}

impl std::error::Error for ExpandError {}

/// Look up the expansion rule for a camelCased property name.
///
/// Returns `None` for every property without shorthand semantics; the caller
/// then classifies the raw value instead.
pub fn expansion_for(property: &str) -> Option<Expansion> {
    let expansion: Expansion = match property {
        "margin" | "padding" | "inset" => edges::expand_box_sides,
        "gap" => edges::expand_gap,
        "overflow" => edges::expand_overflow,
        "borderWidth" => edges::expand_border_widths,
        "borderStyle" => edges::expand_border_styles,
        "borderColor" => edges::expand_border_colors,
        "borderRadius" => edges::expand_border_radii,
        "border" => border::expand_border,
        "flex" => flex::expand_flex,
        "flexFlow" => flex::expand_flex_flow,
        "font" => font::expand_font,
        "textDecoration" => text_decoration::expand_text_decoration,
        "textDecorationLine" => text_decoration::expand_text_decoration_line,
        _ => return None,
    };
    Some(expansion)
}
