/// Dense matrix support.
///
/// Defines the `Matrix` type behind `sis` values: a row-major, rectangular
/// block of `f64` with at least one row and one column. Construction from
/// rows validates rectangularity, and the augmented split into coefficient
/// block and right-hand side lives here.
pub mod matrix;

pub mod core;
