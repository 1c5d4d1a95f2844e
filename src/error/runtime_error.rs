use thiserror::Error;

use crate::{ast::TypeName, error::ErrorKind};

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A system literal whose rows do not all have the same length.
    #[error("Error on line {line}: Malformed system: {details}.")]
    MalformedSystem {
        /// Why the system was rejected.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to declare a variable that already exists.
    #[error("Error on line {line}: Variable '{name}' has already been declared.")]
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a variable that has not been declared (yet).
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value cannot be bound to the declared type.
    #[error("Error on line {line}: Cannot assign a value of type '{found}' to a variable of type '{declared}'.")]
    TypeMismatch {
        /// The type written in the declaration.
        declared: TypeName,
        /// The type of the value on the right-hand side.
        found:    TypeName,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A float that is not a whole number in the `i64` range was declared as
    /// `int`.
    #[error("Error on line {line}: Cannot assign the float {value} to a variable of type 'int': it is not a whole number in the int range.")]
    NotAnInteger {
        /// The offending value.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operation was applied to a variable that is not a `sis`.
    #[error("Error on line {line}: Operation '{operation}' requires a variable of type 'sis', but '{name}' is '{found}'.")]
    ExpectedSystem {
        /// The operation that was called.
        operation: String,
        /// The name of the argument variable.
        name:      String,
        /// The declared type of the argument.
        found:     TypeName,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The operation name is not part of the catalog.
    #[error("Error on line {line}: Unknown operation '{operation}'.")]
    UnknownOperation {
        /// The name that was called.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A statement-only operation was used where a value is required.
    #[error("Error on line {line}: Operation '{operation}' does not return a value and cannot be used in a declaration.")]
    NoReturnValue {
        /// The name that was called.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The matrix does not have the shape the operation needs.
    #[error("Error on line {line}: Operation '{operation}' cannot be applied to a {rows}x{cols} matrix: {details}.")]
    ShapeMismatch {
        /// The operation that was called.
        operation: String,
        /// Rows of the offending operand.
        rows:      usize,
        /// Columns of the offending operand.
        cols:      usize,
        /// What the operation expected.
        details:   &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The linear-algebra service could not complete the operation.
    #[error("Error on line {line}: Operation '{operation}' could not be completed (singular matrix?).")]
    SingularMatrix {
        /// The operation that was called.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Writing program output failed.
    #[error("Failed to write program output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Classifies the error into its [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedSystem { .. } => ErrorKind::Syntax,
            Self::DuplicateDeclaration { .. } => ErrorKind::DuplicateDeclaration,
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::TypeMismatch { .. }
            | Self::NotAnInteger { .. }
            | Self::ExpectedSystem { .. }
            | Self::UnknownOperation { .. }
            | Self::NoReturnValue { .. } => ErrorKind::TypeMismatch,
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            Self::Output(_) => ErrorKind::Io,
        }
    }
}
