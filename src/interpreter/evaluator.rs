/// Core evaluation logic and context management.
///
/// Contains the runtime context, the program driver and its run state, and
/// statement dispatch.
pub mod core;

/// The variable environment.
///
/// An append-only map from names to declared variables, owned by one context.
pub mod environment;

/// Construction of values from literal syntax.
///
/// Classifies numbers as `int` or `float` and validates system blocks.
pub mod literal;

/// Declaration evaluation.
///
/// Resolves the source of a declaration, applies coercion rules and binds the
/// result.
pub mod declaration;

/// The operation catalog.
///
/// The single table describing every linear-algebra operation: whether it
/// returns a value and whether it needs a square operand.
pub mod operation;

/// Operation calls in expression position.
///
/// Evaluates `sis x = inv(s);` style calls against the augmented split of a
/// system.
pub mod call;

/// Operation calls in statement position.
///
/// Executes commands such as `solve(s);` and prints their results.
pub mod command;
