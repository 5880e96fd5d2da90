use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::input::{self, ValidationError};
use crate::math::power::safe_power;

/// Per-index result of the sum-match evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Match found, power computed.
    Value(f64),
    /// The two elements do not sum to the third.
    NoMatch,
    /// Match found but the power expression is undefined or the element
    /// could not be processed.
    Failed,
}

impl Outcome {
    /// Flat float view: no-match reads as `0.0`, a failure as NaN.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Value(v) => v,
            Outcome::NoMatch => 0.0,
            Outcome::Failed => f64::NAN,
        }
    }

    /// Counts any attempted match, including failed ones; only an exact
    /// numeric zero reads as unsuccessful.
    pub fn is_successful(self) -> bool {
        match self {
            Outcome::Value(v) => v != 0.0,
            Outcome::NoMatch => false,
            Outcome::Failed => true,
        }
    }
}

/// Evaluate the triple element-by-element. Structural problems with the
/// input abort the whole run; anything that goes wrong at a single index
/// degrades to `Outcome::Failed` for that index only.
pub fn evaluate(a: &[i64], b: &[i64], c: &[i64]) -> Result<Vec<Outcome>, ValidationError> {
    input::validate_triple(a, b, c)?;
    let mut outcomes = Vec::with_capacity(a.len());
    for i in 0..a.len() {
        outcomes.push(evaluate_element(i, a[i], b[i], c[i]));
    }
    Ok(outcomes)
}

fn evaluate_element(index: usize, a: i64, b: i64, c: i64) -> Outcome {
    let sum = match a.checked_add(b) {
        Some(s) => s,
        None => {
            warn!(index, a, b, "element sum overflowed i64");
            return Outcome::Failed;
        }
    };
    if sum != c {
        debug!(index, a, b, c, "no match");
        return Outcome::NoMatch;
    }
    debug!(index, a, b, c, "match");

    let total = match sum.checked_add(c) {
        Some(t) => t,
        None => {
            warn!(index, a, b, c, "element total overflowed i64");
            return Outcome::Failed;
        }
    };
    let minimum = a.min(b).min(c);
    if minimum < 0 {
        warn!(index, exponent = minimum, "negative exponent");
    }

    match safe_power(total, minimum) {
        Ok(value) => Outcome::Value(value),
        Err(err) => {
            warn!(index, %err, "power evaluation failed");
            Outcome::Failed
        }
    }
}

pub fn outcomes_to_f64(outcomes: &[Outcome]) -> Vec<f64> {
    outcomes.iter().map(|o| o.as_f64()).collect()
}
