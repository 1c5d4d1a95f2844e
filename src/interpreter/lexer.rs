use std::io::{self, Write};

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `-2.5`, `.5` or `2.1e-10`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `int`
    #[token("int")]
    Int,
    /// `float`
    #[token("float")]
    Float,
    /// `eq`
    #[token("eq")]
    Eq,
    /// `sis`
    #[token("sis")]
    Sis,
    /// Identifier tokens; variable or operation names such as `s` or `solve`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// // Multi line comments.
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment = lex.slice();
        if let Some(last) = comment.rfind('\n') {
            lex.extras.line += comment.chars().filter(|&c| c == '\n').count();
            lex.extras.line_start = lex.span().start + last + 1;
        }
        logos::Skip
    })]
    MultiLineComment,
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Line breaks only advance the position bookkeeping.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the symbolic code used in token listings.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Int | Self::Float | Self::Eq | Self::Sis => "TYPE",
            Self::Identifier(_) => "ID",
            Self::Assign => "ASSIGN",
            Self::Semicolon => "END_STATEMENT",
            Self::Comma => "SEPARATOR",
            Self::LParen => "OPEN_CALL",
            Self::RParen => "CLOSE_CALL",
            Self::LBracket => "OPEN_EQUATION",
            Self::RBracket => "CLOSE_EQUATION",
            Self::LBrace => "OPEN_SYSTEM",
            Self::RBrace => "CLOSE_SYSTEM",
            Self::Comment | Self::MultiLineComment | Self::NewLine | Self::Ignored => "SKIPPED",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be reported with a line and a column.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// The recognized token.
    pub token:  Token,
    /// The exact source text of the token.
    pub lexeme: String,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column number.
    pub column: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits source text into positioned tokens.
///
/// # Errors
/// - `UnrecognizedInput` for text that is not part of the language.
/// - `LiteralOutOfRange` for numbers that overflow to infinity.
///
/// # Example
/// ```
/// use prosis::interpreter::lexer::{Token, tokenize};
///
/// let records = tokenize("int x = 4;\nsolve(x);").unwrap();
///
/// assert_eq!(records[0].token, Token::Int);
/// assert_eq!(records[3].token, Token::Number(4.0));
/// assert_eq!((records[5].line, records[5].column), (2, 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<TokenRecord>, ParseError> {
    let mut records = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let lexeme = lexer.slice().to_string();
        let line = lexer.extras.line;
        let column = lexer.span().start - lexer.extras.line_start + 1;

        match token {
            Ok(Token::Number(n)) if !n.is_finite() => {
                return Err(ParseError::LiteralOutOfRange { lexeme, line });
            },
            Ok(token) => records.push(TokenRecord { token,
                                                    lexeme,
                                                    line,
                                                    column }),
            Err(()) => return Err(ParseError::UnrecognizedInput { lexeme, line, column }),
        }
    }

    Ok(records)
}

/// Writes one line per token in the form
/// `Line: 1, Column: 5, Code: ID, Lexeme: "x"`.
///
/// # Errors
/// Propagates failures of the underlying writer.
pub fn write_listing<W: Write>(records: &[TokenRecord], out: &mut W) -> io::Result<()> {
    for record in records {
        writeln!(out,
                 "Line: {}, Column: {}, Code: {}, Lexeme: {:?}",
                 record.line,
                 record.column,
                 record.token.code(),
                 record.lexeme)?;
    }
    Ok(())
}
