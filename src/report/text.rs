//! Text report: bordered section headers and aligned status lines.

use std::io::{self, Write};

use colored::*;
use strum::IntoEnumIterator;

use crate::config::{HEADER_RULE_CHAR, HEADER_WIDTH, LABEL_WIDTH};
use crate::models::{CheckKind, CheckReport, Finding, Status};

fn paint_status(status: Status, color: bool) -> String {
    let text = status.to_string();
    if !color {
        return text;
    }
    match status {
        Status::Pass => text.green().bold().to_string(),
        Status::Warn => text.yellow().bold().to_string(),
        Status::Fail => text.red().bold().to_string(),
    }
}

fn rule() -> String {
    HEADER_RULE_CHAR.to_string().repeat(HEADER_WIDTH)
}

/// Formats a section header: a leading blank line, then the title centered
/// between two rules.
pub fn format_header(title: &str, color: bool) -> String {
    let centered = format!("{:^width$}", title, width = HEADER_WIDTH);
    let centered = if color {
        centered.cyan().bold().to_string()
    } else {
        centered
    };
    format!("\n{}\n{}\n{}", rule(), centered, rule())
}

/// Formats one finding as `<label> [<STATUS>] <message>`.
///
/// The bracketed tag is printed with or without color.
pub fn format_status_line(finding: &Finding, color: bool) -> String {
    format!(
        "{:<width$} [{}] {}",
        finding.label,
        paint_status(finding.status, color),
        finding.message,
        width = LABEL_WIDTH
    )
}

/// Writes the full text report.
pub fn render_text<W: Write>(report: &CheckReport, color: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nChecking records for {}...", report.domain)?;
    for check in CheckKind::iter() {
        writeln!(out, "{}", format_header(check.title(), color))?;
        for finding in report.findings_for(check) {
            writeln!(out, "{}", format_status_line(finding, color))?;
        }
    }
    writeln!(out, "{}", format_header("Check Complete", color))?;
    Ok(())
}
