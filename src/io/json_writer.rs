use std::path::Path;

use anyhow::{Context, Result};

use crate::eval::Outcome;
use crate::math::stats::Summary;
use crate::schema::v1::{EvalReportV1, InputMeta};

pub fn build_report(len: usize, seed: Option<u64>, outcomes: &[Outcome], stats: &Summary) -> EvalReportV1 {
    EvalReportV1 {
        tool: "triad-eval".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta: InputMeta { len, seed },
        outcomes: outcomes.to_vec(),
        stats: stats.clone(),
    }
}

pub fn write_json(path: &Path, report: &EvalReportV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
