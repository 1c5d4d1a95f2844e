use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement, TypeName},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            literal::parse_literal,
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a declaration (it starts with a type keyword) or a
/// command (it starts with an operation name). Both end with `;`.
///
/// # Errors
/// Returns a `ParseError` if the tokens form neither construct.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some(statement) = parse_declaration(tokens)? {
        return Ok(statement);
    }

    match tokens.peek() {
        Some((Token::Identifier(_), line)) => {
            let line = *line;
            parse_command(tokens, line)
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a type or an operation at the start of a statement, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Maps a type keyword token to its [`TypeName`].
const fn type_name_of(token: &Token) -> Option<TypeName> {
    match token {
        Token::Int => Some(TypeName::Int),
        Token::Float => Some(TypeName::Float),
        Token::Eq => Some(TypeName::Eq),
        Token::Sis => Some(TypeName::Sis),
        _ => None,
    }
}

/// Parses a declaration of the form `<type> <identifier> = <source>;`.
///
/// If the next token is not a type keyword, returns `Ok(None)` without
/// consuming input.
///
/// # Errors
/// Returns a `ParseError` if the name, `=`, the source or `;` is malformed.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((token, line)) = tokens.peek() else {
        return Ok(None);
    };
    let Some(type_name) = type_name_of(token) else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = parse_identifier(tokens, line)?;
    expect(tokens, &Token::Assign, line)?;
    let value = parse_source(tokens, line)?;
    expect(tokens, &Token::Semicolon, line)?;

    Ok(Some(Statement::Declaration { type_name,
                                     name,
                                     value,
                                     line }))
}

/// Parses the right-hand side of a declaration.
///
/// Grammar: `source := NUMBER | equation | system | IDENT | IDENT "(" IDENT ")"`
///
/// # Errors
/// Returns a `ParseError` if none of the alternatives match.
fn parse_source<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some(value) = parse_literal(tokens, line)? {
        return Ok(Expr::Literal { value, line });
    }

    let name = parse_identifier(tokens, line)?;

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let argument = parse_identifier(tokens, line)?;
        expect(tokens, &Token::RParen, line)?;

        return Ok(Expr::Call { operation: name,
                               argument,
                               line });
    }

    Ok(Expr::Variable { name, line })
}

/// Parses a command of the form `<operation>(<identifier>);`.
///
/// # Errors
/// Returns a `ParseError` if the parentheses, the argument or `;` are
/// malformed.
fn parse_command<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let operation = parse_identifier(tokens, line)?;
    expect(tokens, &Token::LParen, line)?;
    let argument = parse_identifier(tokens, line)?;
    expect(tokens, &Token::RParen, line)?;
    expect(tokens, &Token::Semicolon, line)?;

    Ok(Statement::Command { operation,
                            argument,
                            line })
}
