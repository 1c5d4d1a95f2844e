/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// The literal builder uses them to classify numbers as `int` or `float`, and
/// the declaration evaluator uses them for `int`/`float` coercion.
pub mod num;
