use std::iter::Peekable;

use crate::{
    ast::Literal,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a single numeric literal.
///
/// # Errors
/// Returns a `ParseError` if the next token is not a number.
pub fn parse_number<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(*n),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected number, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses an equation row of the form `[n1, n2, ..., nN]`.
///
/// An empty row `[]` is accepted by the grammar.
///
/// Grammar: `equation := "[" (NUMBER ("," NUMBER)*)? "]"`.
///
/// # Errors
/// Returns a `ParseError` if `[` is missing, an element is not a number, or
/// the closing `]` is missing.
pub fn parse_equation<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<f64>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::LBracket, line)?;

    parse_comma_separated(tokens, |t| parse_number(t, line), &Token::RBracket, line)
}

/// Parses a system block of the form `{ [..], [..], ... }`.
///
/// Rows are not checked for equal length here; that is the evaluator's
/// responsibility, so the grammar accepts ragged systems.
///
/// Grammar: `system := "{" (equation ("," equation)*)? "}"`.
///
/// # Errors
/// Returns a `ParseError` if `{` is missing, a row fails to parse, or the
/// closing `}` is missing.
pub fn parse_system<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Vec<f64>>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = expect(tokens, &Token::LBrace, line)?;

    parse_comma_separated(tokens, |t| parse_equation(t, line), &Token::RBrace, line)
}

/// Parses whichever literal starts at the current token.
///
/// Returns `Ok(None)` without consuming input if the next token does not
/// start a literal.
///
/// # Errors
/// Propagates errors from the specific literal parsers.
pub fn parse_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Option<Literal>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let literal = match tokens.peek() {
        Some((Token::Number(_), _)) => Literal::Number(parse_number(tokens, line)?),
        Some((Token::LBracket, _)) => Literal::Equation(parse_equation(tokens, line)?),
        Some((Token::LBrace, _)) => Literal::System(parse_system(tokens, line)?),
        _ => return Ok(None),
    };

    Ok(Some(literal))
}
