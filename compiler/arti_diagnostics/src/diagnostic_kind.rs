//! Defines all possible arti diagnostics.

use arti_utils::location::{Locatable, Location};
use thiserror::Error;

use crate::{Diagnostic, Severity};

/// The list of possible errors and notices
// Include names stay as written in the source, never canonicalized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    // ERRORS
    /// A source file (top-level or included) could not be read.
    #[error("couldn't open the file `{path}`: {reason}")]
    CannotOpenFile {
        /// The path as it was handed to the flattener
        path: String,
        /// The operating system's explanation
        reason: String,
    },
    /// A quoted include names a file that is not in the include directory.
    #[error("file `{0}` not found in the include directory")]
    MissingInclude(String),
    /// A quoted include would re-enter a file that is still being flattened.
    #[error("including `{0}` here would recurse into a file that is already being flattened")]
    CircularInclude(String),
    /// Includes are nested deeper than the configured limit.
    #[error("maximum include depth of {0} exceeded")]
    IncludeDepthExceeded(usize),

    // NOTICES
    /// A quoted include whose name was already emitted during this run.
    #[error("ignoring the include of file `{0}`, it was already included")]
    DuplicateInclude(String),
    /// A bracket include whose name was already emitted during this run.
    #[error("ignoring the include of <{0}>, it was already included")]
    DuplicateSystemInclude(String),
}
impl DiagnosticKind {
    /// Create an [error] diagnostic at a given [`Location`]
    ///
    /// [error]: [`Severity::Error`]
    #[must_use]
    #[inline]
    pub fn error_in(self, location: Location) -> Diagnostic {
        Diagnostic::new(Severity::Error, self.at(location))
    }

    /// Create a [note] diagnostic at a given [`Location`]
    ///
    /// [note]: [`Severity::Note`]
    #[must_use]
    #[inline]
    pub fn note_in(self, location: Location) -> Diagnostic {
        Diagnostic::new(Severity::Note, self.at(location))
    }

    /// Whether this kind of diagnostic stops the run
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match *self {
            Self::CannotOpenFile { .. }
            | Self::MissingInclude(_)
            | Self::CircularInclude(_)
            | Self::IncludeDepthExceeded(_) => true,
            Self::DuplicateInclude(_) | Self::DuplicateSystemInclude(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_notices_are_told_apart() {
        assert!(DiagnosticKind::MissingInclude("a.h".into()).is_fatal());
        assert!(DiagnosticKind::IncludeDepthExceeded(4).is_fatal());
        assert!(!DiagnosticKind::DuplicateInclude("a.h".into()).is_fatal());
        assert!(!DiagnosticKind::DuplicateSystemInclude("vector".into()).is_fatal());
    }

    #[test]
    fn messages_name_the_include() {
        insta::assert_snapshot!(
            DiagnosticKind::MissingInclude("missing.h".into()).to_string(),
            @"file `missing.h` not found in the include directory"
        );
        insta::assert_snapshot!(
            DiagnosticKind::DuplicateSystemInclude("vector".into()).to_string(),
            @"ignoring the include of <vector>, it was already included"
        );
        insta::assert_snapshot!(
            DiagnosticKind::CannotOpenFile {
                path: "src/main.h".into(),
                reason: "No such file or directory (os error 2)".into(),
            }
            .to_string(),
            @"couldn't open the file `src/main.h`: No such file or directory (os error 2)"
        );
    }

    #[test]
    fn error_in_and_note_in_set_the_severity() {
        let location = Location::at_line("a.h", 2);

        assert_eq!(
            DiagnosticKind::MissingInclude("b.h".into())
                .error_in(location.clone())
                .severity(),
            &Severity::Error
        );
        assert_eq!(
            DiagnosticKind::DuplicateInclude("b.h".into())
                .note_in(location)
                .severity(),
            &Severity::Note
        );
    }
}
