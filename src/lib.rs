//! # prosis
//!
//! prosis is an interpreter for a small language of typed declarations over
//! numbers, equations and systems of linear equations. Systems are augmented
//! matrices that can be inverted, transposed, factored and solved.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    config::Config,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        parser::core::{ProgramParser, SourceParser},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent a program as a tree. The tree is built by the parser and walked
/// by the evaluator, and it can render itself as an indented outline.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Run settings shared by the library and the command line.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating code, and classifies them into a small set of error kinds.
/// Messages carry the source line of the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Classifies every error into an `ErrorKind`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value
/// representations and the linear-algebra service.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating programs.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversions between integer and floating-point types
/// without silent data loss.
pub mod util;

/// Parses and runs a complete program, writing its output to `out`.
///
/// A fresh evaluation context is created for every call, so no variables
/// survive from one run to the next.
///
/// # Errors
/// Returns the parse error, or the first runtime error, of the program.
///
/// # Examples
/// ```
/// use prosis::{config::Config, run_source};
///
/// let mut out = Vec::new();
/// run_source("sis s = { [2, 1, 5], [1, -1, 1] };\nsolve(s);", &Config::default(), &mut out).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("Solution: [2, 1]"));
///
/// // 'x' is not defined
/// let mut out = Vec::new();
/// assert!(run_source("int y = x;", &Config::default(), &mut out).is_err());
/// ```
pub fn run_source<W: Write>(source: &str, config: &Config, out: &mut W) -> Result<(), Error> {
    run_source_with(&SourceParser, source, config, out)
}

/// Like [`run_source`], but with a caller-supplied parser.
///
/// # Errors
/// Returns the parse error, or the first runtime error, of the program.
pub fn run_source_with<P, W>(parser: &P, source: &str, config: &Config, out: &mut W) -> Result<(), Error>
    where P: ProgramParser + ?Sized,
          W: Write
{
    let program = parser.parse(source)?;
    let mut context = Context::with_config(config, out);
    context.run(&program)?;
    Ok(())
}
