use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character sequence that is not a token of the language.
    #[error("Error on line {line}, column {column}: Unrecognized input: {lexeme}.")]
    UnrecognizedInput {
        /// The offending source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the offending text starts.
        column: usize,
    },
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// Description of the token encountered and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal could not be represented as a finite number.
    #[error("Error on line {line}: Numeric literal '{lexeme}' is out of range.")]
    LiteralOutOfRange {
        /// The literal as written in the source.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}
