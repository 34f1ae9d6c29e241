//! Defines types for arti diagnostics.
//!
//! This module defines the [`Diagnostic`] struct, which encapsulates a
//! diagnostic message along with its severity, location and (optionally) the
//! source line it refers to.

use std::{error::Error, fmt::Display};

use ansi_term::{Color, Style};
use arti_utils::location::{Located, Location};

use crate::{fmt::display_source_window, DiagnosticKind};

/// The severity of a [`Diagnostic`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Severity {
    /// Error. Flattening will not continue.
    Error,
    /// Informational. Flattening continues and the output is unaffected.
    Note,
}
impl Severity {
    /// The terminal style used to paint this severity
    pub(crate) fn style(&self) -> Style {
        match *self {
            Self::Error => Color::Red.bold(),
            Self::Note => Color::Cyan.bold(),
        }
    }

    /// The label text for this severity
    const fn text(&self) -> &'static str {
        match *self {
            Self::Error => "error",
            Self::Note => "note",
        }
    }
}
impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// A diagnostic message produced by arti
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How bad this is
    severity: Severity,
    /// What happened, and where
    kind: Located<DiagnosticKind>,
    /// The source line the location points at, if it was available
    snippet: Option<String>,
}

impl Diagnostic {
    /// Create a new [`Diagnostic`] without a source snippet
    #[must_use]
    pub const fn new(severity: Severity, kind: Located<DiagnosticKind>) -> Self {
        Self {
            severity,
            kind,
            snippet: None,
        }
    }

    /// Attach the offending source line to this [`Diagnostic`]
    #[must_use]
    pub fn with_snippet(mut self, line: impl Into<String>) -> Self {
        self.snippet = Some(line.into());
        self
    }

    /// Obtains the [`Severity`] of this diagnostic
    #[must_use]
    pub const fn severity(&self) -> &Severity {
        &self.severity
    }

    /// Obtains the [`DiagnosticKind`] of this diagnostic
    #[must_use]
    pub const fn kind(&self) -> &DiagnosticKind {
        self.kind.value()
    }

    /// Obtains the [`Location`] this diagnostic points at
    #[must_use]
    pub const fn location(&self) -> &Location {
        self.kind.location()
    }

    /// Obtains the source line attached to this diagnostic, if any
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    /// Render this [`Diagnostic`] for a terminal, with colors and a source
    /// window when a snippet is attached
    #[must_use]
    pub fn print(&self) -> String {
        let header = format!(
            "{}: {}\n  {} {}",
            self.severity.style().paint(self.severity.text()),
            Color::White.bold().paint(self.kind().to_string()),
            Color::Blue.bold().paint("-->"),
            self.location()
        );

        match (self.snippet(), self.location().line()) {
            (Some(snippet), Some(line)) => format!(
                "{header}\n{}",
                display_source_window(&self.severity, line, snippet)
            ),
            _ => header,
        }
    }
}
impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}\n  --> {}",
            self.severity,
            self.kind(),
            self.location()
        )
    }
}

impl Error for Diagnostic {}
