use crate::workflow::runner::WorkflowReport;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Writes the full scenario report as pretty JSON, creating parent
/// directories as needed.
pub fn write_report(report: &WorkflowReport, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    fs::write(path, json).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

/// Appends a one-line run summary to a rolling log file.
pub fn append_summary_line(report: &WorkflowReport, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let line = format!(
        "scenario={} ranked={} critical={} decision={:?} sort_micros={}\n",
        report.scenario,
        report.ranking.ranked_ids.len(),
        report.ranking.critical.len(),
        report.ranking.decision,
        report.ranking.sort_micros
    );

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening summary log {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("appending summary log {}", path.display()))?;
    Ok(())
}
