//! Report rendering.
//!
//! Findings are written either as the sectioned text report or as a single
//! JSON document. Both writers take any `std::io::Write`.

mod json;
mod text;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::models::CheckReport;

pub use json::render_json;
pub use text::{format_header, format_status_line, render_text};

/// Renders `report` in `format` to `out`.
///
/// `color` only affects the text format.
pub fn render_report<W: Write>(
    report: &CheckReport,
    format: OutputFormat,
    color: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, color, out)?,
        OutputFormat::Json => render_json(report, out)?,
    }
    out.flush()?;
    Ok(())
}
