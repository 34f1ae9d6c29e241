//! Line classification
//!
//! Every source line is exactly one [`Directive`]. Only single-line forms are
//! recognized: a directive continued with a backslash is just a [`Plain`]
//! line as far as the flattener is concerned.
//!
//! [`Plain`]: Directive::Plain

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// The target of an include directive and the comment that followed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Include<'a> {
    /// The name exactly as written between the delimiters
    pub name: &'a str,
    /// A same-line `//` or `/*` comment, starting at its delimiter
    pub comment: Option<&'a str>,
}

/// What a single source line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `#pragma ...`, dropped from the output
    Pragma,
    /// `#include "name"`, resolved against the include directory
    QuotedInclude(Include<'a>),
    /// `#include <name>`, passed through once
    BracketInclude(Include<'a>),
    /// Anything else, copied unchanged
    Plain,
}

/// Get the pragma line regex
fn pragma_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#pragma[ \t]+\S").expect("Invalid regex"))
}

/// Get the quoted include regex
fn quoted_include_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = concat!(
            r#"^#include ?"(?P<name>[^"]+)""#,
            r"(?:[ \t]*(?P<comment>(?://|/\*).*?))?[ \t]*$"
        );
        Regex::new(pattern).expect("Invalid regex")
    })
}

/// Get the bracket include regex
fn bracket_include_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = concat!(
            r"^#include ?<(?P<name>[^>]+)>",
            r"(?:[ \t]*(?P<comment>(?://|/\*).*?))?[ \t]*$"
        );
        Regex::new(pattern).expect("Invalid regex")
    })
}

/// Pull the name and optional comment out of an include match
fn include_from_captures<'a>(caps: &Captures<'a>) -> Include<'a> {
    Include {
        name: caps.name("name").map_or("", |cap| cap.as_str()),
        comment: caps.name("comment").map(|cap| cap.as_str()),
    }
}

/// Classify one line of source text
#[must_use]
pub fn classify(line: &str) -> Directive<'_> {
    if pragma_regex().is_match(line) {
        return Directive::Pragma;
    }

    if let Some(caps) = quoted_include_regex().captures(line) {
        return Directive::QuotedInclude(include_from_captures(&caps));
    }

    if let Some(caps) = bracket_include_regex().captures(line) {
        return Directive::BracketInclude(include_from_captures(&caps));
    }

    Directive::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand for building an [`Include`]
    const fn include<'a>(name: &'a str, comment: Option<&'a str>) -> Include<'a> {
        Include { name, comment }
    }

    #[test]
    fn pragmas_are_recognized() {
        assert_eq!(classify("#pragma once"), Directive::Pragma);
        assert_eq!(classify("#pragma warning(disable: 4996)"), Directive::Pragma);
    }

    #[test]
    fn bare_or_indented_pragma_is_plain() {
        assert_eq!(classify("#pragma"), Directive::Plain);
        assert_eq!(classify("  #pragma once"), Directive::Plain);
        assert_eq!(classify("#pragmatic"), Directive::Plain);
    }

    #[test]
    fn quoted_include_with_and_without_space() {
        assert_eq!(
            classify("#include \"util.h\""),
            Directive::QuotedInclude(include("util.h", None))
        );
        assert_eq!(
            classify("#include\"util.h\""),
            Directive::QuotedInclude(include("util.h", None))
        );
        assert_eq!(classify("#include  \"util.h\""), Directive::Plain);
    }

    #[test]
    fn quoted_include_keeps_trailing_comment() {
        assert_eq!(
            classify("#include \"util.h\" // helpers"),
            Directive::QuotedInclude(include("util.h", Some("// helpers")))
        );
        assert_eq!(
            classify("#include \"util.h\"/* helpers */"),
            Directive::QuotedInclude(include("util.h", Some("/* helpers */")))
        );
    }

    #[test]
    fn quotes_in_the_comment_do_not_leak_into_the_name() {
        assert_eq!(
            classify("#include \"a.h\" // see \"b.h\""),
            Directive::QuotedInclude(include("a.h", Some("// see \"b.h\"")))
        );
    }

    #[test]
    fn nested_paths_are_kept_verbatim() {
        assert_eq!(
            classify("#include \"detail/impl.hpp\""),
            Directive::QuotedInclude(include("detail/impl.hpp", None))
        );
    }

    #[test]
    fn bracket_includes_are_recognized() {
        assert_eq!(
            classify("#include <vector>"),
            Directive::BracketInclude(include("vector", None))
        );
        assert_eq!(
            classify("#include<sys/types.h> // posix"),
            Directive::BracketInclude(include("sys/types.h", Some("// posix")))
        );
    }

    #[test]
    fn trailing_whitespace_is_tolerated() {
        assert_eq!(
            classify("#include <map>   "),
            Directive::BracketInclude(include("map", None))
        );
    }

    #[test]
    fn anything_else_is_plain() {
        assert_eq!(classify(""), Directive::Plain);
        assert_eq!(classify("int x;"), Directive::Plain);
        assert_eq!(classify("#ifdef FOO"), Directive::Plain);
        assert_eq!(classify("#include \"a.h\" junk"), Directive::Plain);
        assert_eq!(classify("#include \"\""), Directive::Plain);
        assert_eq!(classify("// #include \"a.h\""), Directive::Plain);
    }
}
