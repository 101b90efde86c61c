//! CLI output formatting.
//!
//! A finished run prints a short summary:
//!
//! ```text
//! photo.jpg 100x50 → padded.jpg 100x100
//!     Border: 0 left/right, 25 top/bottom
//!     Ratios: width 1, height 2
//! ```
//!
//! With `--json` the same [`PadReport`] is printed as a JSON object instead.
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::imaging::PadReport;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the summary of a finished run.
pub fn format_pad_output(report: &PadReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}x{} → {} {}x{}",
        report.input.display(),
        report.source.width,
        report.source.height,
        report.output.display(),
        report.padded.width,
        report.padded.height,
    )];
    lines.push(format!(
        "{}Border: {} left/right, {} top/bottom",
        indent(1),
        report.border.width,
        report.border.height
    ));
    let square = if report.spec.square { ", square" } else { "" };
    lines.push(format!(
        "{}Ratios: width {}, height {}{}",
        indent(1),
        report.spec.width_ratio,
        report.spec.height_ratio,
        square
    ));
    lines
}

/// Print the summary of a finished run.
pub fn print_pad_output(report: &PadReport) {
    for line in format_pad_output(report) {
        println!("{}", line);
    }
}

/// Format the report as pretty JSON.
pub fn format_pad_json(report: &PadReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Print the report as pretty JSON.
pub fn print_pad_json(report: &PadReport) -> Result<(), serde_json::Error> {
    println!("{}", format_pad_json(report)?);
    Ok(())
}

/// Format an error line for stderr.
pub fn format_error(err: &dyn std::error::Error) -> String {
    format!("Error: {err}")
}
