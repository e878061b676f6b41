//! `textDecoration` and `textDecorationLine` shorthands.

use style_tokens::{TokenStream, ValueToken};
use style_values::{StyleMap, Value};

use crate::matchers;
use crate::ExpandError;

const LINE_KEYWORDS: &[&str] = &["none", "underline", "overline", "line-through"];
const STYLE_KEYWORDS: &[&str] = &["solid", "double", "dotted", "dashed", "wavy"];

fn line_keyword(token: &ValueToken) -> Option<String> {
    match token {
        ValueToken::Ident(word)
            if LINE_KEYWORDS
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword)) =>
        {
            Some(word.clone())
        }
        _ => None,
    }
}

/// Expand `textDecoration` into line, style, and color longhands.
///
/// Roles appear in any order; line keywords may repeat (`underline
/// line-through`). Defaults: line `none`, style `solid`, color `black`.
pub fn expand_text_decoration(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let mut lines: Vec<String> = Vec::new();
    let mut line_style: Option<Value> = None;
    let mut color: Option<Value> = None;

    let style_keyword = matchers::keyword_from(STYLE_KEYWORDS);
    while !stream.is_exhausted() {
        if let Some(line) = stream.take_if(line_keyword) {
            lines.push(line);
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
    if lines.is_empty() && line_style.is_none() && color.is_none() {
        return Err(ExpandError::missing(property));
    }

    let line = if lines.is_empty() {
        Value::string("none")
    } else {
        Value::String(lines.join(" "))
    };
    Ok(StyleMap::from([
        ("textDecorationLine".to_owned(), line),
        (
            "textDecorationStyle".to_owned(),
            line_style.unwrap_or_else(|| Value::string("solid")),
        ),
        (
            "textDecorationColor".to_owned(),
            color.unwrap_or_else(|| Value::string("black")),
        ),
    ]))
}

/// Expand `textDecorationLine`: one or more line keywords, space-joined.
pub fn expand_text_decoration_line(
    stream: &mut TokenStream,
    property: &str,
) -> Result<StyleMap, ExpandError> {
    let mut lines: Vec<String> = Vec::new();
    while let Some(line) = stream.take_if(line_keyword) {
        lines.push(line);
    }
    if lines.is_empty() {
        return Err(ExpandError::missing(property));
    }
    if !stream.is_exhausted() {
        return Err(ExpandError::unexpected(property));
    }
    Ok(StyleMap::from([(
        "textDecorationLine".to_owned(),
        Value::String(lines.join(" ")),
    )]))
}
