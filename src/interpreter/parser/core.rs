use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenRecord, tokenize},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Anything that can turn source text into a [`Program`].
///
/// The evaluator only sees the resulting tree, so a different front end can be
/// plugged in without touching evaluation.
pub trait ProgramParser {
    /// Parses a complete program.
    ///
    /// # Errors
    /// Returns a `ParseError` for any lexical or grammatical problem.
    fn parse(&self, source: &str) -> ParseResult<Program>;
}

/// The default front end: the logos lexer followed by recursive descent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceParser;

impl ProgramParser for SourceParser {
    fn parse(&self, source: &str) -> ParseResult<Program> {
        let records = tokenize(source)?;
        parse_records(&records)
    }
}

/// Parses already tokenized input.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a valid program.
pub fn parse_records(records: &[TokenRecord]) -> ParseResult<Program> {
    let tokens = records.iter()
                        .map(|record| (record.token.clone(), record.line))
                        .collect::<Vec<_>>();
    parse_program(&tokens)
}

/// Parses a full program: statements until the tokens run out.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use prosis::{
///     ast::Statement,
///     interpreter::{lexer::Token, parser::core::parse_program},
/// };
///
/// let tokens = vec![(Token::Identifier("det".into()), 1),
///                   (Token::LParen, 1),
///                   (Token::Identifier("s".into()), 1),
///                   (Token::RParen, 1),
///                   (Token::Semicolon, 1)];
///
/// let program = parse_program(&tokens).unwrap();
/// assert!(matches!(&program.statements[0], Statement::Command { operation, .. } if operation == "det"));
/// ```
///
/// # Errors
/// Returns the first `ParseError` encountered.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Program { statements })
}
