//! Declaration-block parsing on top of `cssparser`.
//! Spec: <https://www.w3.org/TR/css-syntax-3/#declaration-rule-list>
//!
//! Accepts either a bare declaration list (`color: red; margin: 0`) or a
//! full rule (`.card { color: red }`); in the rule form the first rule's
//! block is used. Individual invalid declarations are skipped, never fatal.

use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;
use std::fmt;

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as written (custom properties are case-sensitive).
    pub property: String,
    /// Raw value text without a trailing `!important`.
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

/// The input is not parseable CSS at all: no rule and no usable declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxError {
    pub reason: String,
    pub line: u32,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} on line {}", self.reason, self.line)
    }
}

impl std::error::Error for SyntaxError {}

/// Parse `!important` at the end of a value, returning (`value_without_important`, `important_flag`).
///
/// The marker only counts when it is the value's tail; `!important` text
/// embedded earlier (inside a string, say) is part of the value.
fn split_important_tail(value: &str) -> (String, bool) {
    const MARKER: &str = "!important";
    let trimmed = value.trim();
    if let Some(pos) = trimmed.len().checked_sub(MARKER.len())
        && let Some(tail) = trimmed.get(pos..)
        && tail.eq_ignore_ascii_case(MARKER)
        && let Some(prefix) = trimmed.get(..pos)
    {
        return (prefix.trim_end().to_owned(), true);
    }
    (trimmed.to_owned(), false)
}

/// A declaration parser that records property name and its raw value.
struct BodyDeclParser;

impl CssDeclarationParser<'_> for BodyDeclParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        // Consume until end of the declaration item.
        while input.next_including_whitespace_and_comments().is_ok() {}
        let raw = input.slice_from(start);
        let (value, important) = split_important_tail(raw);
        if value.is_empty() {
            return Err(input.new_error(BasicParseErrorKind::EndOfInput));
        }
        Ok(Declaration {
            property: name.to_string(),
            value,
            important,
        })
    }
}

impl CssAtRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type AtRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        // Not produced by this parser
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, Self::Error> {
        Err(())
    }
}

impl CssQualifiedRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type QualifiedRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, Declaration, ()> for BodyDeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Top-level parser that collects the declarations of qualified rules.
struct TopLevelParser;

impl CssAtRuleParser<'_> for TopLevelParser {
    type Prelude = ();
    type AtRule = Vec<Declaration>;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        // At-rules are outside this transform's input contract.
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, Self::Error> {
        Err(())
    }
}

impl CssQualifiedRuleParser<'_> for TopLevelParser {
    type Prelude = (); // selector text is irrelevant here
    type QualifiedRule = Vec<Declaration>;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Ok(parse_declarations_from_block(input))
    }
}

/// Parse declarations from a rule block, logging and skipping invalid items.
fn parse_declarations_from_block(block: &mut Parser) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    let mut body = BodyDeclParser;
    for item in CssRuleBodyParser::new(block, &mut body) {
        match item {
            Ok(declaration) => out.push(declaration),
            Err((error, text)) => {
                log::warn!(
                    "discarding invalid declaration {text:?} at line {}: {:?}",
                    error.location.line + 1,
                    error.kind
                );
            }
        }
    }
    out
}

/// Parse a CSS blob into the first rule's ordered declaration list.
///
/// Bare declaration lists parse as-is; `sel { ... }` input uses the first
/// rule's block. Invalid declarations inside an otherwise usable block are
/// logged and skipped.
///
/// # Errors
/// Returns [`SyntaxError`] with the first parse failure's reason and
/// 1-based line when the input yields no rule and no declaration.
pub fn parse_declaration_block(css: &str) -> Result<Vec<Declaration>, SyntaxError> {
    // Rule form first: mirrors taking the first rule's nodes from a
    // stylesheet parse.
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut top = TopLevelParser;
    for rule in StyleSheetParser::new(&mut parser, &mut top).flatten() {
        return Ok(rule);
    }

    // Bare declaration-list form.
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut body = BodyDeclParser;
    let mut out: Vec<Declaration> = Vec::new();
    let mut first_error: Option<SyntaxError> = None;
    for item in CssRuleBodyParser::new(&mut parser, &mut body) {
        match item {
            Ok(declaration) => out.push(declaration),
            Err((error, text)) => {
                log::warn!(
                    "discarding invalid declaration {text:?} at line {}: {:?}",
                    error.location.line + 1,
                    error.kind
                );
                if first_error.is_none() {
                    first_error = Some(SyntaxError {
                        reason: format!("{:?}", error.kind),
                        line: error.location.line + 1,
                    });
                }
            }
        }
    }
    if out.is_empty()
        && let Some(error) = first_error
    {
        return Err(error);
    }
    Ok(out)
}
