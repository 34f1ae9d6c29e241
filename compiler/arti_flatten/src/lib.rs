#![doc = r"Source flattener: inlines quoted `#include` directives into one file"]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    non_exhaustive_omitted_patterns,
    unsafe_op_in_unsafe_fn,
    variant_size_differences,
    unused_qualifications,
    clippy::unwrap_used,
    clippy::print_stderr,
    clippy::print_stdout
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions,
    clippy::doc_comment_double_space_linebreaks,
    clippy::result_large_err
)]

pub mod assembler;
pub mod directive;
pub mod flattener;
pub mod registry;

use std::path::Path;

use arti_diagnostics::Diagnostic;

pub use crate::flattener::{FlattenOptions, Flattener};

/// The successful result of a flattening run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flattened {
    /// The merged text; every line ends in `\n`
    pub text: String,
    /// Duplicate-include notices, meant for a diagnostic stream and never
    /// part of [`Flattened::text`]
    pub notices: Vec<Diagnostic>,
}

/// Flatten `input`, inlining every quoted include found under `include_dir`.
///
/// This runs with [`FlattenOptions::default`]. Each call starts with an empty
/// include registry.
///
/// # Errors
///
/// Returns a diagnostic error if:
/// * `input` or any included file cannot be read
/// * a quoted include names a file missing from `include_dir`
/// * includes recurse back into a file that is still open, or nest deeper
///   than [`FlattenOptions::max_depth`]
///
/// # Example
/// ```no_run
/// use std::path::Path;
///
/// let flattened = arti_flatten::flatten(Path::new("src/lib.h"), Path::new("include"))?;
/// print!("{}", flattened.text);
/// # Ok::<(), arti_diagnostics::Diagnostic>(())
/// ```
pub fn flatten(input: &Path, include_dir: &Path) -> Result<Flattened, Diagnostic> {
    flatten_with(input, include_dir, FlattenOptions::default())
}

/// Flatten `input` like [`flatten`], with explicit [`FlattenOptions`].
///
/// # Errors
///
/// See [`flatten`].
pub fn flatten_with(
    input: &Path,
    include_dir: &Path,
    options: FlattenOptions,
) -> Result<Flattened, Diagnostic> {
    let mut flattener = Flattener::new(include_dir, options);
    let text = flattener.flatten_file(input)?;

    Ok(Flattened {
        text,
        notices: flattener.into_notices(),
    })
}
