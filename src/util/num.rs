/// `2^63` as an `f64`: the first whole number above `i64::MAX`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to `f64` if and only if the conversion is exact.
///
/// ## Errors
/// Returns `Err(error)` if the nearest `f64` is a different number.
///
/// ## Example
/// ```
/// use prosis::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(42, "inexact!"), Ok(42.0));
/// assert_eq!(i64_to_f64_checked(10_000_000_000_000_000, "inexact!"), Ok(1e16));
/// assert!(i64_to_f64_checked(9_007_199_254_740_993, "inexact!").is_err());
/// assert!(i64_to_f64_checked(i64::MAX, "inexact!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    let converted = value as f64;
    if f64_to_i64_exact(converted) != Some(value) {
        return Err(error);
    }
    Ok(converted)
}

/// Converts an `f64` to `i64` if the value is finite, integral, and inside
/// the `i64` range.
///
/// Returns `None` for fractional, non-finite or out-of-range values. This is
/// the test that decides whether a numeric literal is an `int` and whether a
/// float may be narrowed into an `int` variable.
///
/// ## Example
/// ```
/// use prosis::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(4.0), Some(4));
/// assert_eq!(f64_to_i64_exact(-12.0), Some(-12));
/// assert_eq!(f64_to_i64_exact(1e16), Some(10_000_000_000_000_000));
/// assert_eq!(f64_to_i64_exact(-9_223_372_036_854_775_808.0), Some(i64::MIN));
/// assert_eq!(f64_to_i64_exact(4.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(9_223_372_036_854_775_808.0), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value >= I64_UPPER_BOUND {
        return None;
    }
    Some(value as i64)
}
