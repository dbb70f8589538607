//! Integer division guarded against a zero divisor.

use crate::error::ValidationError;

/// Truncating integer division.
///
/// Fails with [`ValidationError::ZeroDivisor`] before dividing when the
/// divisor is zero. Division truncates toward zero, standard integer
/// semantics. The one unrepresentable quotient, `i64::MIN / -1`, saturates
/// to `i64::MAX` instead of overflowing.
pub fn divide(dividend: i64, divisor: i64) -> Result<i64, ValidationError> {
    if divisor == 0 {
        return Err(ValidationError::ZeroDivisor);
    }
    Ok(dividend.saturating_div(divisor))
}
