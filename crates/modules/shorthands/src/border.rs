//! The `border` shorthand: `<width> || <style> || <color>`, any order.

use style_tokens::TokenStream;
use style_values::{StyleMap, Value};

use crate::matchers;
use crate::ExpandError;

/// Expand `border` into `borderWidth`, `borderStyle`, and `borderColor`.
///
/// Each role may appear at most once, in any order. Omitted roles take the
/// style-object defaults: width 1, style `solid`, color `black`.
pub fn expand_border(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let mut width: Option<Value> = None;
    let mut line_style: Option<Value> = None;
    let mut color: Option<Value> = None;

    let style_keyword = matchers::keyword_from(matchers::BORDER_STYLE_KEYWORDS);
    while !stream.is_exhausted() {
        if width.is_none()
            && let Some(value) = stream.take_if(matchers::dimension_or_number)
        {
            width = Some(value);
            continue;
        }
        if line_style.is_none()
            && let Some(value) = stream.take_if(&style_keyword)
        {
            line_style = Some(value);
            continue;
        }
        if color.is_none()
            && let Some(value) = stream.take_if(matchers::color)
        {
            color = Some(value);
            continue;
        }
        return Err(ExpandError::unexpected(property));
    }
    if width.is_none() && line_style.is_none() && color.is_none() {
        return Err(ExpandError::missing(property));
    }

    Ok(StyleMap::from([
        (
            "borderWidth".to_owned(),
            width.unwrap_or(Value::Number(1.0)),
        ),
        (
            "borderStyle".to_owned(),
            line_style.unwrap_or_else(|| Value::string("solid")),
        ),
        (
            "borderColor".to_owned(),
            color.unwrap_or_else(|| Value::string("black")),
        ),
    ]))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use style_values::{Dimension, LengthUnit};

    use super::*;

    fn expand(value: &str) -> Result<StyleMap, ExpandError> {
        let mut stream =
            TokenStream::from_value(value).map_err(|_| ExpandError::unexpected("border"))?;
        expand_border(&mut stream, "border")
    }

    #[test]
    fn full_form_in_canonical_order() {
        let styles = expand("2px dashed blue").unwrap();
        assert_eq!(
            styles["borderWidth"],
            Value::Dimension(Dimension::new(2.0, LengthUnit::Px))
        );
        assert_eq!(styles["borderStyle"], Value::string("dashed"));
        assert_eq!(styles["borderColor"], Value::string("blue"));
    }

    #[test]
    fn roles_match_in_any_order() {
        let styles = expand("red solid 1px").unwrap();
        assert_eq!(
            styles["borderWidth"],
            Value::Dimension(Dimension::new(1.0, LengthUnit::Px))
        );
        assert_eq!(styles["borderStyle"], Value::string("solid"));
        assert_eq!(styles["borderColor"], Value::string("red"));
    }

    #[test]
    fn omitted_roles_take_defaults() {
        let styles = expand("dotted").unwrap();
        assert_eq!(styles["borderWidth"], Value::Number(1.0));
        assert_eq!(styles["borderStyle"], Value::string("dotted"));
        assert_eq!(styles["borderColor"], Value::string("black"));
    }

    #[test]
    fn hash_and_function_colors_pass_through() {
        let styles = expand("1px solid #8888").unwrap();
        assert_eq!(styles["borderColor"], Value::string("#8888"));

        let styles = expand("1px solid rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(styles["borderColor"], Value::string("rgba(0, 0, 0, 0.5)"));
    }

    #[test]
    fn duplicate_or_foreign_roles_fail() {
        assert_eq!(
            expand("1px 2px solid"),
            Err(ExpandError::unexpected("border"))
        );
        assert_eq!(expand(""), Err(ExpandError::missing("border")));
    }
}
