//! `flex` and `flexFlow` shorthands.

use style_tokens::{TokenStream, ValueToken};
use style_values::{StyleMap, Value};

use crate::matchers;
use crate::ExpandError;

const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
const FLEX_WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

/// Flex basis: a dimension, a percentage, or the `auto` keyword.
fn basis(token: &ValueToken) -> Option<Value> {
    matchers::box_side(token)
}

/// Expand `flex` into `flexGrow`, `flexShrink`, and `flexBasis`.
///
/// `none` means `0 0 auto`. Otherwise the grammar is
/// `<grow> [<shrink>] [<basis>]` with shrink defaulting to 1 and basis to 0.
pub fn expand_flex(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let none = stream.take_if(|token| match token {
        ValueToken::Ident(word) if word.eq_ignore_ascii_case("none") => Some(()),
        _ => None,
    });
    if none.is_some() {
        if !stream.is_exhausted() {
            return Err(ExpandError::unexpected(property));
        }
        return Ok(StyleMap::from([
            ("flexGrow".to_owned(), Value::Number(0.0)),
            ("flexShrink".to_owned(), Value::Number(0.0)),
            ("flexBasis".to_owned(), Value::string("auto")),
        ]));
    }

    let grow = stream
        .take_if(matchers::number)
        .ok_or_else(|| ExpandError::missing(property))?;
    let shrink = stream.take_if(matchers::number).unwrap_or(1.0);
    let flex_basis = stream.take_if(basis).unwrap_or(Value::Number(0.0));
    if !stream.is_exhausted() {
        return Err(ExpandError::unexpected(property));
    }

    Ok(StyleMap::from([
        ("flexGrow".to_owned(), Value::Number(grow)),
        ("flexShrink".to_owned(), Value::Number(shrink)),
        ("flexBasis".to_owned(), flex_basis),
    ]))
}

/// Expand `flexFlow` into `flexDirection` and `flexWrap`, accepting the two
/// keywords in either order with `row` / `nowrap` defaults.
pub fn expand_flex_flow(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let mut direction: Option<Value> = None;
    let mut wrap: Option<Value> = None;

    let direction_keyword = matchers::keyword_from(FLEX_DIRECTIONS);
    let wrap_keyword = matchers::keyword_from(FLEX_WRAPS);
    while !stream.is_exhausted() {
        if direction.is_none()
            && let Some(value) = stream.take_if(&direction_keyword)
        {
            direction = Some(value);
            continue;
        }
        if wrap.is_none()
            && let Some(value) = stream.take_if(&wrap_keyword)
        {
            wrap = Some(value);
            continue;
        }
        return Err(ExpandError::unexpected(property));
    }
    if direction.is_none() && wrap.is_none() {
        return Err(ExpandError::missing(property));
    }

    Ok(StyleMap::from([
        (
            "flexDirection".to_owned(),
            direction.unwrap_or_else(|| Value::string("row")),
        ),
        (
            "flexWrap".to_owned(),
            wrap.unwrap_or_else(|| Value::string("nowrap")),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use style_values::{Dimension, LengthUnit};

    use super::*;

    fn expand(property: &str, value: &str) -> Result<StyleMap, ExpandError> {
        let expansion = crate::expansion_for(property).ok_or(ExpandError::missing(property))?;
        let mut stream =
            TokenStream::from_value(value).map_err(|_| ExpandError::unexpected(property))?;
        expansion(&mut stream, property)
    }

    #[test]
    fn single_grow_fills_defaults() {
        let styles = expand("flex", "1").unwrap();
        assert_eq!(styles["flexGrow"], Value::Number(1.0));
        assert_eq!(styles["flexShrink"], Value::Number(1.0));
        assert_eq!(styles["flexBasis"], Value::Number(0.0));
    }

    #[test]
    fn grow_shrink_basis_in_full() {
        let styles = expand("flex", "2 3 10%").unwrap();
        assert_eq!(styles["flexGrow"], Value::Number(2.0));
        assert_eq!(styles["flexShrink"], Value::Number(3.0));
        assert_eq!(
            styles["flexBasis"],
            Value::Dimension(Dimension::new(10.0, LengthUnit::Percent))
        );
    }

    #[test]
    fn grow_with_basis_only() {
        let styles = expand("flex", "1 30px").unwrap();
        assert_eq!(styles["flexGrow"], Value::Number(1.0));
        // A bare number binds to shrink first; a dimension skips to basis.
        assert_eq!(styles["flexShrink"], Value::Number(1.0));
        assert_eq!(
            styles["flexBasis"],
            Value::Dimension(Dimension::new(30.0, LengthUnit::Px))
        );
    }

    #[test]
    fn none_means_fully_inflexible() {
        let styles = expand("flex", "none").unwrap();
        assert_eq!(styles["flexGrow"], Value::Number(0.0));
        assert_eq!(styles["flexShrink"], Value::Number(0.0));
        assert_eq!(styles["flexBasis"], Value::string("auto"));
    }

    #[test]
    fn flex_flow_accepts_either_order() {
        let styles = expand("flexFlow", "wrap column").unwrap();
        assert_eq!(styles["flexDirection"], Value::string("column"));
        assert_eq!(styles["flexWrap"], Value::string("wrap"));

        let styles = expand("flexFlow", "row-reverse").unwrap();
        assert_eq!(styles["flexDirection"], Value::string("row-reverse"));
        assert_eq!(styles["flexWrap"], Value::string("nowrap"));
    }

    #[test]
    fn foreign_tokens_fail() {
        assert_eq!(
            expand("flex", "1 solid"),
            Err(ExpandError::unexpected("flex"))
        );
        assert_eq!(
            expand("flexFlow", "diagonal"),
            Err(ExpandError::unexpected("flexFlow"))
        );
    }
}
