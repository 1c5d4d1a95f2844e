use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens and
/// numeric literals that cannot be represented. They are raised before the
/// evaluator runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a program:
/// duplicate or unknown variables, type and shape mismatches, malformed
/// systems and failures reported by the linear-algebra service.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of every failure a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed source text or a non-rectangular system literal.
    Syntax,
    /// A name was declared twice.
    DuplicateDeclaration,
    /// A name was used before (or without) being declared.
    UndefinedVariable,
    /// Coercion failure, wrong declared type or misuse of an operation.
    TypeMismatch,
    /// A non-square operand where squareness is required.
    ShapeMismatch,
    /// The linear-algebra service reported a numerical failure.
    SingularMatrix,
    /// Reading input or writing output failed.
    Io,
}

/// Top-level error for a complete run: parsing, evaluation or I/O.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies the error into its [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => e.kind(),
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
