//! Aggregate statistics over an outcome sequence.

use serde::{Deserialize, Serialize};

use crate::eval::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: usize,
    pub valid_count: usize,
    pub successful_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub has_errors: bool,
}

/// Summarize an outcome sequence. Never fails: an empty sequence or one
/// with no valid entries yields zeroed summary values.
pub fn summarize(outcomes: &[Outcome]) -> Summary {
    let mut valid = Vec::with_capacity(outcomes.len());
    let mut successful = 0usize;
    let mut has_errors = false;

    for outcome in outcomes {
        match outcome {
            Outcome::Value(v) if v.is_finite() => valid.push(*v),
            Outcome::Value(_) | Outcome::Failed => has_errors = true,
            Outcome::NoMatch => valid.push(0.0),
        }
        if outcome.is_successful() {
            successful += 1;
        }
    }

    if valid.is_empty() {
        return Summary {
            total_count: outcomes.len(),
            valid_count: 0,
            successful_count: successful,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            has_errors,
        };
    }

    let sum: f64 = valid.iter().sum();
    let mut min = valid[0];
    let mut max = valid[0];
    for &v in &valid[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    Summary {
        total_count: outcomes.len(),
        valid_count: valid.len(),
        successful_count: successful,
        mean: sum / valid.len() as f64,
        min,
        max,
        has_errors,
    }
}
