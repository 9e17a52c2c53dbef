//! JSON report.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::CheckReport;

/// Writes `report` as one pretty-printed JSON document followed by a newline.
pub fn render_json<W: Write>(report: &CheckReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}
