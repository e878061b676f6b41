//! Box-model shorthands: edge spreads, corner spreads, and the two-value
//! axis shorthands (`gap`, `overflow`).

use style_tokens::TokenStream;
use style_values::{StyleMap, Value};

use crate::matchers;
use crate::ExpandError;

const OVERFLOW_KEYWORDS: &[&str] = &["visible", "hidden", "clip", "scroll", "auto"];

/// Consume between 1 and `max` values accepted by `matcher`. The stream must
/// be exhausted afterwards; anything left over is a grammar mismatch.
fn collect_values(
    stream: &mut TokenStream,
    matcher: impl Fn(&style_tokens::ValueToken) -> Option<Value>,
    max: usize,
    property: &str,
) -> Result<Vec<Value>, ExpandError> {
    let mut values = Vec::new();
    while values.len() < max {
        match stream.take_if(&matcher) {
            Some(value) => values.push(value),
            None => break,
        }
    }
    if values.is_empty() {
        return Err(ExpandError::missing(property));
    }
    if !stream.is_exhausted() {
        return Err(ExpandError::unexpected(property));
    }
    Ok(values)
}

/// TRBL spread: 1 value sets all sides, 2 set vertical/horizontal, 3 set
/// top/horizontal/bottom, 4 set each side clockwise from the top.
fn spread_sides(keys: [String; 4], values: Vec<Value>) -> StyleMap {
    let [top_key, right_key, bottom_key, left_key] = keys;
    let (top, right, bottom, left) = match values.as_slice() {
        [all] => (all.clone(), all.clone(), all.clone(), all.clone()),
        [vertical, horizontal] => (
            vertical.clone(),
            horizontal.clone(),
            vertical.clone(),
            horizontal.clone(),
        ),
        [top, horizontal, bottom] => (
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        ),
        [top, right, bottom, left] => (top.clone(), right.clone(), bottom.clone(), left.clone()),
        _ => return StyleMap::new(),
    };
    StyleMap::from([
        (top_key, top),
        (right_key, right),
        (bottom_key, bottom),
        (left_key, left),
    ])
}

/// Corner spread for radii: 1 value sets all corners, 2 set the diagonals,
/// 3 set top-left / diagonal / bottom-right, 4 set each corner clockwise
/// from the top-left.
fn spread_corners(keys: [String; 4], values: Vec<Value>) -> StyleMap {
    let [top_left_key, top_right_key, bottom_right_key, bottom_left_key] = keys;
    let (top_left, top_right, bottom_right, bottom_left) = match values.as_slice() {
        [all] => (all.clone(), all.clone(), all.clone(), all.clone()),
        [first, second] => (first.clone(), second.clone(), first.clone(), second.clone()),
        [first, second, third] => (first.clone(), second.clone(), third.clone(), second.clone()),
        [first, second, third, fourth] => {
            (first.clone(), second.clone(), third.clone(), fourth.clone())
        }
        _ => return StyleMap::new(),
    };
    StyleMap::from([
        (top_left_key, top_left),
        (top_right_key, top_right),
        (bottom_right_key, bottom_right),
        (bottom_left_key, bottom_left),
    ])
}

/// Longhand keys for a side-spread shorthand. `margin` yields `marginTop`
/// and friends; `inset` targets the bare offset properties.
fn side_keys(property: &str) -> [String; 4] {
    if property == "inset" {
        return [
            "top".to_owned(),
            "right".to_owned(),
            "bottom".to_owned(),
            "left".to_owned(),
        ];
    }
    ["Top", "Right", "Bottom", "Left"].map(|side| format!("{property}{side}"))
}

/// `margin`, `padding`, and `inset`: 1-4 box values spread onto sides.
pub fn expand_box_sides(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::box_side, 4, property)?;
    Ok(spread_sides(side_keys(property), values))
}

/// `gap`: row gap, then an optional column gap.
pub fn expand_gap(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::dimension_or_number, 2, property)?;
    let row = values[0].clone();
    let column = values.get(1).cloned().unwrap_or_else(|| row.clone());
    Ok(StyleMap::from([
        ("rowGap".to_owned(), row),
        ("columnGap".to_owned(), column),
    ]))
}

/// `overflow`: horizontal axis, then an optional vertical axis.
pub fn expand_overflow(stream: &mut TokenStream, property: &str) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::keyword_from(OVERFLOW_KEYWORDS), 2, property)?;
    let horizontal = values[0].clone();
    let vertical = values.get(1).cloned().unwrap_or_else(|| horizontal.clone());
    Ok(StyleMap::from([
        ("overflowX".to_owned(), horizontal),
        ("overflowY".to_owned(), vertical),
    ]))
}

/// `borderWidth`: 1-4 widths spread onto `border<Side>Width`.
pub fn expand_border_widths(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::dimension_or_number, 4, property)?;
    let keys = ["Top", "Right", "Bottom", "Left"].map(|side| format!("border{side}Width"));
    Ok(spread_sides(keys, values))
}

/// `borderStyle`: 1-4 line styles spread onto `border<Side>Style`.
pub fn expand_border_styles(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let values = collect_values(
        stream,
        matchers::keyword_from(matchers::BORDER_STYLE_KEYWORDS),
        4,
        property,
    )?;
    let keys = ["Top", "Right", "Bottom", "Left"].map(|side| format!("border{side}Style"));
    Ok(spread_sides(keys, values))
}

/// `borderColor`: 1-4 colors spread onto `border<Side>Color`.
pub fn expand_border_colors(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::color, 4, property)?;
    let keys = ["Top", "Right", "Bottom", "Left"].map(|side| format!("border{side}Color"));
    Ok(spread_sides(keys, values))
}

/// `borderRadius`: 1-4 radii spread onto the corner longhands.
pub fn expand_border_radii(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let values = collect_values(stream, matchers::dimension_or_number, 4, property)?;
    let keys = ["TopLeft", "TopRight", "BottomRight", "BottomLeft"]
        .map(|corner| format!("border{corner}Radius"));
    Ok(spread_corners(keys, values))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use style_values::{Dimension, LengthUnit};

    use super::*;

    fn expand(property: &str, value: &str) -> Result<StyleMap, ExpandError> {
        let expansion = crate::expansion_for(property).ok_or(ExpandError::missing(property))?;
        let mut stream = TokenStream::from_value(value).map_err(|_| ExpandError::unexpected(property))?;
        expansion(&mut stream, property)
    }

    fn px(value: &str) -> Value {
        Value::Dimension(Dimension {
            value: value.to_owned(),
            unit: LengthUnit::Px,
        })
    }

    #[test]
    fn one_margin_value_sets_all_sides() {
        let styles = expand("margin", "10px").unwrap();
        for side in ["marginTop", "marginRight", "marginBottom", "marginLeft"] {
            assert_eq!(styles[side], px("10"));
        }
    }

    #[test]
    fn two_margin_values_split_axes() {
        let styles = expand("margin", "10px 20px").unwrap();
        assert_eq!(styles["marginTop"], px("10"));
        assert_eq!(styles["marginBottom"], px("10"));
        assert_eq!(styles["marginLeft"], px("20"));
        assert_eq!(styles["marginRight"], px("20"));
    }

    #[test]
    fn three_margin_values_set_top_horizontal_bottom() {
        let styles = expand("margin", "1px 2px 3px").unwrap();
        assert_eq!(styles["marginTop"], px("1"));
        assert_eq!(styles["marginRight"], px("2"));
        assert_eq!(styles["marginBottom"], px("3"));
        assert_eq!(styles["marginLeft"], px("2"));
    }

    #[test]
    fn four_margin_values_run_clockwise() {
        let styles = expand("margin", "1px 2px 3px 4px").unwrap();
        assert_eq!(styles["marginTop"], px("1"));
        assert_eq!(styles["marginRight"], px("2"));
        assert_eq!(styles["marginBottom"], px("3"));
        assert_eq!(styles["marginLeft"], px("4"));
    }

    #[test]
    fn margin_accepts_auto_and_percentages() {
        let styles = expand("margin", "0 auto").unwrap();
        assert_eq!(styles["marginTop"], Value::Number(0.0));
        assert_eq!(styles["marginLeft"], Value::string("auto"));

        let styles = expand("margin", "50%").unwrap();
        assert_eq!(
            styles["marginTop"],
            Value::Dimension(Dimension {
                value: "50".to_owned(),
                unit: LengthUnit::Percent,
            })
        );
    }

    #[test]
    fn inset_targets_bare_offset_longhands() {
        let styles = expand("inset", "0 10px").unwrap();
        assert_eq!(styles["top"], Value::Number(0.0));
        assert_eq!(styles["right"], px("10"));
        assert_eq!(styles["bottom"], Value::Number(0.0));
        assert_eq!(styles["left"], px("10"));
    }

    #[test]
    fn gap_defaults_column_to_row() {
        let styles = expand("gap", "4px").unwrap();
        assert_eq!(styles["rowGap"], px("4"));
        assert_eq!(styles["columnGap"], px("4"));

        let styles = expand("gap", "4px 8px").unwrap();
        assert_eq!(styles["rowGap"], px("4"));
        assert_eq!(styles["columnGap"], px("8"));
    }

    #[test]
    fn overflow_spreads_axes() {
        let styles = expand("overflow", "hidden scroll").unwrap();
        assert_eq!(styles["overflowX"], Value::string("hidden"));
        assert_eq!(styles["overflowY"], Value::string("scroll"));
    }

    #[test]
    fn border_radius_spreads_diagonals() {
        let styles = expand("borderRadius", "1px 2px").unwrap();
        assert_eq!(styles["borderTopLeftRadius"], px("1"));
        assert_eq!(styles["borderTopRightRadius"], px("2"));
        assert_eq!(styles["borderBottomRightRadius"], px("1"));
        assert_eq!(styles["borderBottomLeftRadius"], px("2"));
    }

    #[test]
    fn border_color_spreads_colors() {
        let styles = expand("borderColor", "red #00ff00").unwrap();
        assert_eq!(styles["borderTopColor"], Value::string("red"));
        assert_eq!(styles["borderRightColor"], Value::string("#00ff00"));
    }

    #[test]
    fn too_many_or_foreign_tokens_fail() {
        assert_eq!(
            expand("margin", "1px 2px 3px 4px 5px"),
            Err(ExpandError::unexpected("margin"))
        );
        assert_eq!(
            expand("borderStyle", "solid squiggly"),
            Err(ExpandError::unexpected("borderStyle"))
        );
        assert_eq!(expand("margin", ""), Err(ExpandError::missing("margin")));
    }
}
