/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64` and `f64`
/// without risking silent data loss or rounding errors. The value model uses
/// them whenever a declaration copies a number into a variable of the other
/// numeric kind.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range or not an integer.
pub mod num;
