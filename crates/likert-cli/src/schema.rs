//! On-disk report schema.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;
use chrono::{DateTime, Utc};
use likert_analysis::record::ComparisonRecord;
use serde::Serialize;

/// A written comparison report: the records plus enough context to
/// reproduce the run.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub cohort: String,
    pub comparison: Option<String>,
    pub records: Vec<ComparisonRecord>,
}

pub(crate) fn save_report<P>(report: &ComparisonReport, path: P) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
