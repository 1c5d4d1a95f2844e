/// The evaluator module executes parsed programs.
///
/// The evaluator walks the statements of a program in source order, builds
/// values from literals, applies the declaration and coercion rules, and
/// dispatches operation calls to the linear-algebra service. It owns the
/// variable environment for exactly one run.
///
/// # Responsibilities
/// - Binds declared variables and enforces write-once declarations.
/// - Consults the operation catalog for both declarations and commands.
/// - Reports runtime errors such as undefined variables or singular matrices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, a type
/// keyword, an identifier or a delimiter. It also produces the token listing
/// the command line writes next to the input file.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace and comments while keeping line numbers accurate.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// Numeric linear algebra on dense matrices.
///
/// Defines the `LinearAlgebra` service the evaluator delegates to and its
/// default implementation based on LU decomposition with partial pivoting.
pub mod linalg;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` of declarations and commands. Every malformed construct is
/// rejected here, before the evaluator runs.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, floats, vectors (bound by `eq`) and matrices (bound
/// by `sis`). The set is closed, so every consumer can match it exhaustively.
pub mod value;
