use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(RuntimeError::ValueError)` if the value exceeds
/// `MAX_SAFE_U64_INT` in absolute value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use paper::{
///     error::RuntimeError,
///     util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked},
/// };
///
/// // Works for safe values
/// assert_eq!(i64_to_f64_checked(42, 1).unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// let err = i64_to_f64_checked(big, 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::ValueError { line: 3, .. }));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked(value: i64, line: usize) -> EvalResult<f64> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(RuntimeError::ValueError { details: format!("{value} cannot be represented exactly as a float"),
                                              line });
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// - `RuntimeError::ValueError` for non-finite or out-of-range values.
/// - `RuntimeError::TypeError` for fractional values.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `line`: Source code line number for error reporting.
///
/// # Example
/// ```
/// use paper::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// // Safe conversion
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
///
/// // Fractional value
/// let err = f64_to_i64_checked(1.5, 123).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeError { line: 123, .. }));
///
/// // Out of range
/// let err = f64_to_i64_checked(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::ValueError { line: 5, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::ValueError { details: format!("Cannot convert non-finite value {value} to int"),
                                              line });
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::ValueError { details: format!("{value} is out of range for int"),
                                              line });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::TypeError { details: format!("Cannot convert fractional value {value} to int"),
                                             line });
    }
    Ok(value as i64)
}
