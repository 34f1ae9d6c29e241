//! Associations to places within the flattened source tree
//!
//! Unlike a byte span, a [`Location`] names a whole file and, optionally, a
//! line within it. This is all the flattener ever needs to report: which
//! directive, in which file, caused a problem.
//!
//! Read the documentation for the types [`Location`] and [`Located<T>`], and
//! the trait [`Locatable`] to learn more.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Represents a file and an optional line within it
///
/// The line number is 1-based and counts the lines the flattener actually
/// looked at, which excludes stripped `#pragma` lines. A location without a
/// line refers to the file as a whole (for example when it cannot be opened).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// The file this location points into
    file: PathBuf,
    /// The 1-indexed line number, if known
    line: Option<usize>,
}
impl Location {
    /// Create a [`Location`] pointing at a whole file
    #[must_use]
    pub fn in_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            line: None,
        }
    }

    /// Create a [`Location`] pointing at a specific line of a file
    ///
    /// # Panics
    /// Panics if `line` is zero, since lines are 1-indexed.
    #[must_use]
    pub fn at_line(file: impl Into<PathBuf>, line: usize) -> Self {
        assert!(line > 0, "line numbers are 1-indexed (got line 0)");
        Self {
            file: file.into(),
            line: Some(line),
        }
    }

    /// Obtains the file this [`Location`] points into
    #[must_use]
    #[inline]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Obtains the 1-indexed line of this [`Location`], if any
    #[must_use]
    #[inline]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Creates a [`Located<T>`] instance using this [`Location`] and a value
    #[must_use]
    #[inline]
    pub const fn containing<T>(self, value: T) -> Located<T> {
        Located::from_location_and_value(self, value)
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.file.display()),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

/// Represents something (`T`) found at a [`Location`].
///
/// An instance of [`Located`] can be obtained in a few ways:
/// - Direct construction ([`Located::from_location_and_value`])
/// - By attaching a value to a [`Location`] ([`Location::containing`])
/// - By attaching a [`Location`] to a value (with the [`Locatable`] trait's
///   [`Locatable::at`] method)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T>(Location, T);
impl<T> Located<T> {
    /// Create a new [`Located<T>`] instance from a [`Location`] and value
    #[must_use]
    #[inline]
    pub const fn from_location_and_value(location: Location, value: T) -> Self {
        Self(location, value)
    }

    /// Obtains the [`Location`] associated with this [`Located<T>`] instance
    #[must_use]
    #[inline]
    pub const fn location(&self) -> &Location {
        &self.0
    }

    /// Obtains a reference to the value this [`Located<T>`] instance wraps
    #[inline]
    pub const fn value(&self) -> &T {
        &self.1
    }

    /// Applies a function to the contained value, keeping the [`Location`]
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        let Self(location, value) = self;
        Located(location, f(value))
    }

    /// Splits this [`Located<T>`] into its [`Location`] and value
    #[allow(clippy::missing_const_for_fn)]
    #[inline]
    pub fn into_parts(self) -> (Location, T) {
        (self.0, self.1)
    }

    /// "Strips" the [`Located<T>`] of its [`Location`], returning the inner
    /// value
    #[allow(clippy::missing_const_for_fn)]
    #[inline]
    pub fn into_value(self) -> T {
        self.1
    }
}
impl<T> Display for Located<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

/// A trait automatically implemented on all types that allows you to attach a
/// [`Location`] to something, creating a [`Located<T>`] instance.
pub trait Locatable
where
    Self: Sized,
{
    /// Attach a [`Location`] to this value, creating a [`Located<T>`]
    fn at(self, location: Location) -> Located<Self>;
}

impl<T: Sized> Locatable for T {
    #[inline]
    fn at(self, location: Location) -> Located<Self> {
        Located::from_location_and_value(location, self)
    }
}
