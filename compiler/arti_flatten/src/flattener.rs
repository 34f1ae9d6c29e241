//! Recursive include resolution
//!
//! A [`Flattener`] is the state of one top-level run: the include directory,
//! the [`IncludeRegistry`], the stack of files currently being flattened and
//! the notices produced so far. Each call to [`flatten`](crate::flatten)
//! builds a fresh one, so separate runs never see each other's includes.

use std::{
    io::Error as IoError,
    path::{Path, PathBuf},
};

use arti_diagnostics::{Diagnostic, DiagnosticKind};
use arti_utils::{io, location::Location};
use tracing::{debug, info, trace};

use crate::{
    assembler::Assembler,
    directive::{classify, Directive, Include},
    registry::IncludeRegistry,
};

/// Knobs for a flattening run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    /// How deeply includes may nest before the run fails. `None` means no
    /// limit.
    pub max_depth: Option<usize>,
    /// Fail when an include re-enters a file that is still being flattened
    pub detect_cycles: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            detect_cycles: true,
        }
    }
}

/// Build the error for a file that could not be read
fn cannot_open(path: &Path, err: &IoError) -> Diagnostic {
    DiagnosticKind::CannotOpenFile {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .error_in(Location::in_file(path))
}

/// The state of one top-level flattening run
#[derive(Debug)]
pub struct Flattener {
    /// The sole base directory for quoted includes
    include_dir: PathBuf,
    /// Limits for this run
    options: FlattenOptions,
    /// Names already emitted
    registry: IncludeRegistry,
    /// Canonical paths of the files currently open, outermost first, each
    /// with the registry size at the time it was entered
    active: Vec<(PathBuf, usize)>,
    /// Non-fatal diagnostics, in the order they were raised
    notices: Vec<Diagnostic>,
}

impl Flattener {
    /// Start a new run resolving quoted includes against `include_dir`
    #[must_use]
    pub fn new(include_dir: impl Into<PathBuf>, options: FlattenOptions) -> Self {
        Self {
            include_dir: include_dir.into(),
            options,
            registry: IncludeRegistry::new(),
            active: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// The names emitted so far in this run
    #[must_use]
    pub const fn registry(&self) -> &IncludeRegistry {
        &self.registry
    }

    /// The notices raised so far in this run
    #[must_use]
    pub fn notices(&self) -> &[Diagnostic] {
        &self.notices
    }

    /// Consume the run, returning its notices
    #[must_use]
    pub fn into_notices(self) -> Vec<Diagnostic> {
        self.notices
    }

    /// Flatten the file at `path`, inlining its quoted includes
    ///
    /// # Errors
    /// Fails with the first fatal [`Diagnostic`] met at any nesting depth. No
    /// partial output is returned in that case.
    pub fn flatten_file(&mut self, path: &Path) -> Result<String, Diagnostic> {
        self.flatten_recursive(path, 0)
    }

    /// Read and flatten one file, keeping the active stack up to date
    fn flatten_recursive(&mut self, file: &Path, depth: usize) -> Result<String, Diagnostic> {
        debug!(file = %file.display(), depth, "flattening file");

        let source = io::read_source(file).map_err(|err| cannot_open(file, &err))?;

        let entered = if self.options.detect_cycles {
            let canonical = file.canonicalize().map_err(|err| cannot_open(file, &err))?;
            self.active.push((canonical, self.registry.len()));
            true
        } else {
            false
        };

        let result = self.flatten_source(file, &source, depth);

        if entered {
            self.active.pop();
        }

        debug!(file = %file.display(), ok = result.is_ok(), "finished file");
        result
    }

    /// Walk the lines of an already-read file
    fn flatten_source(
        &mut self,
        file: &Path,
        source: &str,
        depth: usize,
    ) -> Result<String, Diagnostic> {
        let mut assembler = Assembler::new();
        let mut line_number = 0;

        for line in source.lines() {
            let directive = classify(line);
            trace!(?directive, "classified line");

            // pragma lines are dropped and don't count towards line numbers
            match directive {
                Directive::Pragma => continue,
                Directive::Plain => {
                    line_number += 1;
                    assembler.line(line);
                }
                Directive::QuotedInclude(include) => {
                    line_number += 1;
                    let location = Location::at_line(file, line_number);
                    self.resolve_quoted(&include, location, line, depth, &mut assembler)?;
                }
                Directive::BracketInclude(include) => {
                    line_number += 1;
                    let location = Location::at_line(file, line_number);
                    self.resolve_bracket(&include, location, line, &mut assembler);
                }
            }
        }

        Ok(assembler.finish())
    }

    /// Inline a quoted include, or skip it if its name was already emitted
    fn resolve_quoted(
        &mut self,
        include: &Include<'_>,
        location: Location,
        line: &str,
        depth: usize,
        assembler: &mut Assembler,
    ) -> Result<(), Diagnostic> {
        let candidate = self.include_dir.join(include.name);

        if !candidate.exists() {
            return Err(DiagnosticKind::MissingInclude(include.name.to_string())
                .error_in(location)
                .with_snippet(line));
        }

        if self.registry.contains(include.name) {
            self.notice(
                DiagnosticKind::DuplicateInclude(include.name.to_string())
                    .note_in(location)
                    .with_snippet(line),
            );
            assembler.comment(include.comment);
            return Ok(());
        }

        if let Some(limit) = self.options.max_depth {
            if depth >= limit {
                return Err(DiagnosticKind::IncludeDepthExceeded(limit)
                    .error_in(location)
                    .with_snippet(line));
            }
        }

        if self.options.detect_cycles {
            let canonical = candidate
                .canonicalize()
                .map_err(|err| cannot_open(&candidate, &err))?;
            if self.would_recurse_forever(&canonical) {
                return Err(DiagnosticKind::CircularInclude(include.name.to_string())
                    .error_in(location)
                    .with_snippet(line));
            }
        }

        let body = self.flatten_recursive(&candidate, depth + 1)?;

        self.registry.insert(include.name);
        assembler.block(include.name, &body);
        assembler.comment(include.comment);

        Ok(())
    }

    /// Whether re-entering `canonical` now would repeat an earlier entry
    ///
    /// What a file expands to depends only on the file and on the registry.
    /// The registry only grows, so an open file entered with the same number
    /// of names would expand exactly as it did then, back into itself. If the
    /// registry grew in the meantime the nested expansion may stop at a
    /// duplicate, so it is allowed to go ahead.
    fn would_recurse_forever(&self, canonical: &Path) -> bool {
        let names = self.registry.len();
        self.active
            .iter()
            .any(|(open, entered_with)| open == canonical && *entered_with == names)
    }

    /// Pass a bracket include through the first time its name is seen
    fn resolve_bracket(
        &mut self,
        include: &Include<'_>,
        location: Location,
        line: &str,
        assembler: &mut Assembler,
    ) {
        if self.registry.insert(include.name) {
            assembler.line(line);
            return;
        }

        self.notice(
            DiagnosticKind::DuplicateSystemInclude(include.name.to_string())
                .note_in(location)
                .with_snippet(line),
        );
        assembler.comment(include.comment);
    }

    /// Record a non-fatal diagnostic
    fn notice(&mut self, diagnostic: Diagnostic) {
        info!(location = %diagnostic.location(), "{}", diagnostic.kind());
        self.notices.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn default_options_detect_cycles_without_a_depth_limit() {
        let options = FlattenOptions::default();

        assert_eq!(options.max_depth, None);
        assert!(options.detect_cycles);
    }

    #[test]
    fn registry_grows_across_nested_files() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        fs::write(dir.path().join("inner.h"), "#include <cstdint>\nint inner;\n")
            .expect("should write");
        fs::write(dir.path().join("outer.h"), "#include \"inner.h\"\n")
            .expect("should write");
        fs::write(dir.path().join("main.c"), "#include \"outer.h\"\n#include <cstdint>\n")
            .expect("should write");

        let mut flattener = Flattener::new(dir.path(), FlattenOptions::default());
        let text = flattener
            .flatten_file(&dir.path().join("main.c"))
            .expect("flattening should succeed");

        assert_eq!(flattener.registry().len(), 3);
        assert!(flattener.registry().contains("cstdint"));
        assert_eq!(text.matches("#include <cstdint>").count(), 1);
        assert_eq!(flattener.notices().len(), 1);
        assert!(flattener.active.is_empty());
    }

    #[test]
    fn depth_limit_is_enforced() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        fs::write(dir.path().join("c.h"), "int c;\n").expect("should write");
        fs::write(dir.path().join("b.h"), "#include \"c.h\"\n").expect("should write");
        fs::write(dir.path().join("a.h"), "#include \"b.h\"\n").expect("should write");

        let options = FlattenOptions {
            max_depth: Some(1),
            detect_cycles: true,
        };
        let err = Flattener::new(dir.path(), options)
            .flatten_file(&dir.path().join("a.h"))
            .expect_err("nesting two deep should fail");

        assert_eq!(err.kind(), &DiagnosticKind::IncludeDepthExceeded(1));
        assert!(err.location().file().ends_with("b.h"));
    }

    #[test]
    fn pragmas_do_not_count_towards_line_numbers() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        fs::write(
            dir.path().join("a.h"),
            "#pragma once\nint a;\n#include \"gone.h\"\n",
        )
        .expect("should write");

        let err = Flattener::new(dir.path(), FlattenOptions::default())
            .flatten_file(&dir.path().join("a.h"))
            .expect_err("missing include should fail");

        assert_eq!(err.location().line(), Some(2));
        assert_eq!(err.snippet(), Some("#include \"gone.h\""));
    }

    #[test]
    fn pragmas_are_dropped_wherever_they_appear() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        fs::write(
            dir.path().join("a.h"),
            "int a;\n#pragma once\n#pragma pack(1)\nint b;\n#pragma GCC poison x\n",
        )
        .expect("should write");

        let text = Flattener::new(dir.path(), FlattenOptions::default())
            .flatten_file(&dir.path().join("a.h"))
            .expect("flattening should succeed");

        assert_eq!(text, "int a;\nint b;\n");
    }

    #[test]
    fn reentry_is_a_cycle_only_when_nothing_was_registered_since() {
        let flattener = Flattener {
            include_dir: PathBuf::from("include"),
            options: FlattenOptions::default(),
            registry: IncludeRegistry::new(),
            active: vec![(PathBuf::from("/src/a.h"), 0)],
            notices: Vec::new(),
        };
        assert!(flattener.would_recurse_forever(Path::new("/src/a.h")));
        assert!(!flattener.would_recurse_forever(Path::new("/src/b.h")));

        let mut grown = flattener;
        grown.registry.insert("b.h");
        assert!(!grown.would_recurse_forever(Path::new("/src/a.h")));
    }
}
