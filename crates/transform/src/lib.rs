//! CSS declaration blocks to camelCased style mappings.
//!
//! `transform` parses a CSS blob, normalizes each property name, expands
//! shorthand properties into their longhands, classifies every value, and
//! merges the results into one flat [`StyleMap`]. One malformed declaration
//! never aborts the block: it is logged and skipped, and only a top-level
//! syntax error empties the result.

#![forbid(unsafe_code)]

use std::fmt;

use heck::ToLowerCamelCase as _;
use style_shorthands::{expansion_for, ExpandError};
use style_tokens::{TokenStream, TokenizeError};
use style_values::classify;

pub mod block;

pub use block::{Declaration, SyntaxError};
pub use style_values::{Diagnostics, Dimension, LengthUnit, StyleMap, Value};

/// Failure to process a single declaration. Callers of [`transform`] never
/// see this; the pipeline logs it and skips the declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    Tokenize(TokenizeError),
    Expand(ExpandError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenize(error) => write!(formatter, "{error}"),
            Self::Expand(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<TokenizeError> for TransformError {
    fn from(error: TokenizeError) -> Self {
        Self::Tokenize(error)
    }
}

impl From<ExpandError> for TransformError {
    fn from(error: ExpandError) -> Self {
        Self::Expand(error)
    }
}

/// Knobs for one transform call.
#[derive(Clone, Debug, Default)]
pub struct TransformOptions {
    /// camelCased shorthand names to classify raw instead of expanding.
    /// Entries that name no known shorthand have no effect.
    pub shorthand_denylist: Vec<String>,
    /// Advisory diagnostics configuration, also gating the enriched
    /// per-declaration failure logs.
    pub diagnostics: Diagnostics,
}

/// Normalize a property name: custom properties (`--foo`) pass through
/// verbatim, everything else is lower-camel-cased.
pub fn property_name(raw: &str) -> String {
    if is_custom_property(raw) {
        return raw.to_owned();
    }
    raw.to_lower_camel_case()
}

/// `--` followed by a word character, per the custom-property syntax.
fn is_custom_property(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        rest.chars()
            .next()
            .is_some_and(|first| first.is_alphanumeric() || first == '_')
    })
}

/// Produce the style entries for one declaration.
///
/// A property is classified raw when `allow_shorthand` is false or when no
/// expansion rule exists for it; otherwise its value is tokenized and fed to
/// the expansion rule.
///
/// # Errors
/// Returns [`TransformError`] when a shorthand value cannot be tokenized or
/// does not match the property's grammar.
pub fn styles_for_property(
    property: &str,
    value: &str,
    allow_shorthand: bool,
    diagnostics: &Diagnostics,
) -> Result<StyleMap, TransformError> {
    let value = value.trim();
    let expansion = if allow_shorthand {
        expansion_for(property)
    } else {
        None
    };
    match expansion {
        Some(expansion) => {
            let mut stream = TokenStream::from_value(value)?;
            Ok(expansion(&mut stream, property)?)
        }
        None => Ok(StyleMap::from([(
            property.to_owned(),
            classify(property, value, diagnostics),
        )])),
    }
}

/// Transform a CSS declaration block into a flat style mapping.
pub fn transform(css: &str) -> StyleMap {
    transform_with_options(css, &TransformOptions::default())
}

/// [`transform`] with an explicit shorthand denylist and diagnostics
/// configuration.
///
/// Declarations that fail to process are skipped; their keys are simply
/// absent from the result. A top-level syntax error is logged (reason and
/// line) and yields an empty mapping rather than failing the call.
pub fn transform_with_options(css: &str, options: &TransformOptions) -> StyleMap {
    let declarations = match block::parse_declaration_block(css) {
        Ok(declarations) => declarations,
        Err(error) => {
            log::error!("{error}");
            return StyleMap::new();
        }
    };

    let mut styles = StyleMap::new();
    for declaration in declarations {
        let property = property_name(&declaration.property);
        let allow_shorthand = !options
            .shorthand_denylist
            .iter()
            .any(|denied| denied == &property);
        match styles_for_property(
            &property,
            &declaration.value,
            allow_shorthand,
            &options.diagnostics,
        ) {
            Ok(expanded) => styles.extend(expanded),
            Err(error) => {
                if options.diagnostics.is_enabled() {
                    log::warn!(
                        "failed to parse declaration \"{property}: {}\": {error}",
                        declaration.value
                    );
                }
            }
        }
    }
    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_names_camel_case() {
        assert_eq!(property_name("background-color"), "backgroundColor");
        assert_eq!(property_name("border-top-width"), "borderTopWidth");
        assert_eq!(property_name("color"), "color");
    }

    #[test]
    fn custom_property_names_pass_through_verbatim() {
        assert_eq!(property_name("--my-color"), "--my-color");
        assert_eq!(property_name("--My_Color"), "--My_Color");
        // A lone double hyphen is not a custom property.
        assert_eq!(property_name("--"), "");
    }
}
