//! Tokenization of a single declaration's value text.
//! Spec: <https://www.w3.org/TR/css-syntax-3/#tokenization>
//!
//! Wraps `cssparser` component values in an owned token type plus a cursor
//! (`TokenStream`) that shorthand expanders consume sequentially. Whitespace
//! and comments are dropped at tokenization time.

#![forbid(unsafe_code)]

use std::fmt;

use cssparser::{BasicParseErrorKind, ParseError, Parser, ParserInput, Token};

/// One component value from a declaration's value text.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueToken {
    Number(f32),
    /// `<number><ident>`, unit lowercased. The unit is not validated here;
    /// matchers decide which units they accept.
    Dimension { value: f32, unit: String },
    /// Percentage points: `50%` is `50.0`.
    Percentage(f32),
    Ident(String),
    QuotedString(String),
    /// Hash token without the leading `#`.
    Hash(String),
    /// A function call such as `rgb(1, 2, 3)`. `raw` is the full call text
    /// including the name and arguments.
    Function { name: String, raw: String },
    Delim(char),
    Comma,
}

/// Failure to tokenize a value into component values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenizeError {
    /// The value contains a token kind with no place in a property value
    /// (stray semicolon, unbalanced bracket, bad string or url).
    UnexpectedToken,
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token in property value"),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Tokenize one declaration's value text into owned component values.
///
/// # Errors
/// Returns `TokenizeError::UnexpectedToken` when the text contains tokens
/// that cannot appear in a property value.
pub fn tokenize(value: &str) -> Result<Vec<ValueToken>, TokenizeError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut tokens = Vec::new();
    loop {
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(error) if matches!(error.kind, BasicParseErrorKind::EndOfInput) => break,
            Err(_) => return Err(TokenizeError::UnexpectedToken),
        };
        match token {
            Token::Number { value, .. } => tokens.push(ValueToken::Number(value)),
            Token::Dimension { value, unit, .. } => tokens.push(ValueToken::Dimension {
                value,
                unit: unit.as_ref().to_ascii_lowercase(),
            }),
            Token::Percentage {
                unit_value,
                int_value,
                ..
            } => {
                let points = int_value.map_or(unit_value * 100.0, |int| int as f32);
                tokens.push(ValueToken::Percentage(points));
            }
            Token::Ident(name) => tokens.push(ValueToken::Ident(name.to_string())),
            Token::QuotedString(text) => tokens.push(ValueToken::QuotedString(text.to_string())),
            Token::Hash(text) | Token::IDHash(text) => {
                tokens.push(ValueToken::Hash(text.to_string()));
            }
            Token::Function(name) => {
                let name = name.to_ascii_lowercase();
                // Consume the nested block so the raw slice spans the full
                // call, closing parenthesis included.
                parser
                    .parse_nested_block(skip_block)
                    .map_err(|_| TokenizeError::UnexpectedToken)?;
                // The recorded position precedes any skipped whitespace.
                let raw = parser.slice_from(start).trim_start().to_owned();
                tokens.push(ValueToken::Function { name, raw });
            }
            Token::Comma => tokens.push(ValueToken::Comma),
            Token::Delim(character) => tokens.push(ValueToken::Delim(character)),
            _ => return Err(TokenizeError::UnexpectedToken),
        }
    }
    Ok(tokens)
}

/// Drain a nested block so the parser's cursor lands past its closing
/// parenthesis.
fn skip_block<'input>(block: &mut Parser<'input, '_>) -> Result<(), ParseError<'input, ()>> {
    while block.next_including_whitespace_and_comments().is_ok() {}
    Ok(())
}

/// An ordered token sequence with a cursor, owned by a single expansion call.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<ValueToken>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<ValueToken>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Tokenize `value` and wrap the result in a stream.
    ///
    /// # Errors
    /// Propagates `TokenizeError` from [`tokenize`].
    pub fn from_value(value: &str) -> Result<Self, TokenizeError> {
        tokenize(value).map(Self::new)
    }

    /// The token under the cursor, without consuming it.
    pub fn peek(&self) -> Option<&ValueToken> {
        self.tokens.get(self.cursor)
    }

    /// Consume and return the token under the cursor.
    pub fn advance(&mut self) -> Option<ValueToken> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Consume the next token only if `matcher` accepts it, returning the
    /// matcher's output.
    pub fn take_if<T>(&mut self, matcher: impl FnOnce(&ValueToken) -> Option<T>) -> Option<T> {
        let matched = self.peek().and_then(matcher);
        if matched.is_some() {
            self.cursor += 1;
        }
        matched
    }

    /// True once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn tokenizes_mixed_component_values() {
        let tokens = tokenize("1px solid rgb(1, 2, 3)").unwrap();
        assert_eq!(
            tokens,
            vec![
                ValueToken::Dimension {
                    value: 1.0,
                    unit: "px".to_owned(),
                },
                ValueToken::Ident("solid".to_owned()),
                ValueToken::Function {
                    name: "rgb".to_owned(),
                    raw: "rgb(1, 2, 3)".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn percentages_use_integer_text_when_available() {
        assert_eq!(
            tokenize("33%").unwrap(),
            vec![ValueToken::Percentage(33.0)]
        );
        assert_eq!(
            tokenize("12.5%").unwrap(),
            vec![ValueToken::Percentage(12.5)]
        );
    }

    #[test]
    fn hashes_and_strings_and_separators() {
        let tokens = tokenize("#888 \"Helvetica Neue\", sans-serif / 2").unwrap();
        assert_eq!(
            tokens,
            vec![
                ValueToken::Hash("888".to_owned()),
                ValueToken::QuotedString("Helvetica Neue".to_owned()),
                ValueToken::Comma,
                ValueToken::Ident("sans-serif".to_owned()),
                ValueToken::Delim('/'),
                ValueToken::Number(2.0),
            ]
        );
    }

    #[test]
    fn stream_cursor_consumes_in_order() {
        let mut stream = TokenStream::from_value("10px auto").unwrap();
        assert!(!stream.is_exhausted());
        assert!(matches!(stream.peek(), Some(ValueToken::Dimension { .. })));
        assert!(matches!(stream.advance(), Some(ValueToken::Dimension { .. })));

        let word = stream.take_if(|token| match token {
            ValueToken::Ident(word) => Some(word.clone()),
            _ => None,
        });
        assert_eq!(word.as_deref(), Some("auto"));
        assert!(stream.is_exhausted());
        assert_eq!(stream.advance(), None);
    }

    #[test]
    fn take_if_leaves_cursor_on_mismatch() {
        let mut stream = TokenStream::from_value("solid").unwrap();
        let number = stream.take_if(|token| match token {
            ValueToken::Number(number) => Some(*number),
            _ => None,
        });
        assert_eq!(number, None);
        assert!(!stream.is_exhausted());
    }

    #[test]
    fn rejects_tokens_foreign_to_property_values() {
        assert_eq!(tokenize("red; blue"), Err(TokenizeError::UnexpectedToken));
    }
}
