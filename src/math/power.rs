//! Integer power with a domain-checked contract.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerError {
    #[error("zero base with negative exponent: 0^{exponent}")]
    ZeroToNegative { exponent: i64 },
    #[error("exponent {exponent} out of range")]
    ExponentOutOfRange { exponent: i64 },
    #[error("{base}^{exponent} is not representable as f64")]
    Overflow { base: i64, exponent: i64 },
}

/// Raise `base` to `exponent`, failing instead of producing an undefined
/// or non-finite result. `0^0` is defined as `1.0`.
pub fn safe_power(base: i64, exponent: i64) -> Result<f64, PowerError> {
    if base == 0 && exponent < 0 {
        return Err(PowerError::ZeroToNegative { exponent });
    }
    let exp =
        i32::try_from(exponent).map_err(|_| PowerError::ExponentOutOfRange { exponent })?;
    let result = (base as f64).powi(exp);
    if !result.is_finite() {
        return Err(PowerError::Overflow { base, exponent });
    }
    Ok(result)
}
