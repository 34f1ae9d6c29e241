#![doc = "arti - Artichoke Substitution Tool\n\nBundles a multi-file source into one file by inlining its quoted includes."]
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
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_crate_dependencies,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions,
    clippy::doc_comment_double_space_linebreaks,
    clippy::missing_errors_doc
)]

mod build_info;
mod cli;

use std::{
    io::{self, Write},
    path::Path,
    process,
};

use anyhow::bail;
use arti_diagnostics::Diagnostic;
use arti_utils::io::open_output;
use clap::Parser;
use cli::Cli;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber, logging to stderr
///
/// `ARTI_LOG` wins if set. Otherwise `--verbose` selects `debug` and the
/// default is `warn`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ARTI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Print a diagnostic the way a terminal user expects to see it
fn report(diagnostic: &Diagnostic) {
    eprintln!("{}", diagnostic.print());
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    init_tracing(cli.verbose);

    let Some((file, include_dir)) = cli.paths() else {
        bail!("both --file and --include are required, see usage with --help");
    };

    let flattened = match arti_flatten::flatten_with(file, include_dir, cli.flatten_options()) {
        Ok(flattened) => flattened,
        Err(diagnostic) => {
            report(&diagnostic);
            process::exit(1);
        }
    };

    debug!(
        bytes = flattened.text.len(),
        notices = flattened.notices.len(),
        "flattened {}",
        file.display()
    );

    for notice in &flattened.notices {
        report(notice);
    }

    let mut output = open_output(&cli.output).or_else(|err| {
        eprintln!(
            "warning: couldn't open output file `{}` ({err}), printing output to stdout",
            cli.output.display()
        );
        open_output(Path::new("-"))
    })?;

    output.write_all(flattened.text.as_bytes())?;
    output.flush()?;

    Ok(())
}
