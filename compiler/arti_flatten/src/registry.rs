//! The set of include names already emitted during one run

use std::collections::HashSet;

/// Include identifiers considered "already emitted"
///
/// Names are stored exactly as written in the source, so `"a.h"` and
/// `"./a.h"` are different entries even if they resolve to the same file.
/// Quoted and bracket includes share this one namespace. There is no removal:
/// the registry only grows until the run that owns it ends.
#[derive(Debug, Default, Clone)]
pub struct IncludeRegistry {
    /// The names seen so far
    names: HashSet<String>,
}

impl IncludeRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` was already emitted
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record `name` as emitted, returning `false` if it already was
    pub fn insert(&mut self, name: &str) -> bool {
        // look up first so a repeated name doesn't allocate a String
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// The number of distinct names recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
