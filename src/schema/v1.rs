use serde::{Deserialize, Serialize};

use crate::eval::Outcome;
use crate::math::stats::Summary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub len: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub outcomes: Vec<Outcome>,
    pub stats: Summary,
}
