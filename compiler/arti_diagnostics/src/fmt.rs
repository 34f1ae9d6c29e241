//! Defines terminal formatting for arti diagnostics.

use ansi_term::Color;

use crate::Severity;

/// Format and display the 'source window' -- the offending line with an
/// underline beneath its non-blank part.
pub fn display_source_window(severity: &Severity, line_number: usize, line: &str) -> String {
    let start = line.len() - line.trim_start().len();
    let end = line.trim_end().len().max(start + 1);

    let gutter = line_number.to_string().len() + 1; // one extra character of padding

    // Display format:
    //      |
    // line | #include "missing.h"
    //      | ^^^^^^^^^^^^^^^^^^^^
    format!(
        "{} {}\n{} {line}\n{} {} {}",
        " ".repeat(gutter),
        Color::Blue.bold().paint("|"),
        Color::Blue
            .bold()
            .paint(format!("{line_number: >gutter$} |")),
        " ".repeat(gutter),
        Color::Blue.bold().paint("|"),
        severity
            .style()
            .paint(format!("{}{}", " ".repeat(start), "^".repeat(end - start)))
    )
}
