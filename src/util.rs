/// Numeric conversion and formatting helpers.
///
/// Provides the lossless integer to `f64` conversion used for integer
/// literals and the formatting applied to printed numbers.
pub mod num;
