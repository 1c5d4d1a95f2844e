/// Parser entry points.
///
/// Declares the `ProgramParser` capability and the default parser built on
/// the logos lexer.
pub mod core;

/// Literal parsing.
///
/// Parses numbers, equation rows and system blocks.
pub mod literal;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and token expectations.
pub mod utils;

/// Statement parsing.
///
/// Implements declarations, commands and the value sources a declaration can
/// take.
pub mod statement;
