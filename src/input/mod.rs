use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input arrays are empty")]
    Empty,
    #[error("input array lengths differ: a={a}, b={b}, c={c}")]
    LengthMismatch { a: usize, b: usize, c: usize },
}

/// Structural check on the input triple. Runs before any per-index work;
/// a failure here aborts the whole evaluation.
pub fn validate_triple(a: &[i64], b: &[i64], c: &[i64]) -> Result<(), ValidationError> {
    if a.len() != b.len() || a.len() != c.len() {
        return Err(ValidationError::LengthMismatch {
            a: a.len(),
            b: b.len(),
            c: c.len(),
        });
    }
    if a.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}
