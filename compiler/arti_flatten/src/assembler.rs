//! Output assembly
//!
//! Fragments are appended strictly in the order lines are visited, so an
//! inlined file's text lands exactly where its directive stood.

/// The provenance comment opening an inlined block
#[must_use]
pub fn start_marker(name: &str) -> String {
    format!("// File: '{name}'")
}

/// The provenance comment closing an inlined block
#[must_use]
pub fn end_marker(name: &str) -> String {
    format!("// EOF: '{name}'")
}

/// Accumulates the flattened text of one file
#[derive(Debug, Default)]
pub struct Assembler {
    /// Everything emitted so far; every line ends in `\n`
    output: String,
}

impl Assembler {
    /// Create an empty assembler
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one line of text
    pub fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Emit a trailing comment on its own line, if there is one
    pub fn comment(&mut self, comment: Option<&str>) {
        if let Some(comment) = comment.filter(|comment| !comment.is_empty()) {
            self.line(comment);
        }
    }

    /// Emit the flattened text of an included file between provenance markers
    pub fn block(&mut self, name: &str, body: &str) {
        self.line(&start_marker(name));
        self.output.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            self.output.push('\n');
        }
        self.line(&end_marker(name));
    }

    /// Finish this file, returning its flattened text
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}
