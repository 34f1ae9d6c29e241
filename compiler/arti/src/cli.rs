//! Command line interface declarations for arti

use std::path::{Path, PathBuf};

use arti_flatten::FlattenOptions;
use clap::Parser;

/// Artichoke Substitution Tool: flattens a source file by inlining its
/// quoted includes
#[derive(Parser, Debug)]
#[command(version=None)]
pub struct Cli {
    /// Print version information and exit
    #[arg(short, long)]
    pub version: bool,

    /// The file to flatten
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// The directory quoted includes are resolved against
    #[arg(short = 'I', long)]
    pub include: Option<PathBuf>,

    /// The path of the file to write the output to
    /// If not provided, the output will be written to stdout
    #[arg(short, long)]
    #[clap(default_value = "-")]
    pub output: PathBuf,

    /// Fail when includes nest deeper than this (unlimited by default)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Do not check for includes that re-enter a file being flattened
    #[arg(long)]
    pub no_cycle_check: bool,

    /// Log what the flattener is doing (`ARTI_LOG` takes precedence)
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// The input file and include directory, if both were given
    pub fn paths(&self) -> Option<(&Path, &Path)> {
        Some((self.file.as_deref()?, self.include.as_deref()?))
    }

    /// The [`FlattenOptions`] requested on the command line
    pub const fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            max_depth: self.max_depth,
            detect_cycles: !self.no_cycle_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_match_the_classic_interface() {
        let cli = Cli::parse_from(["arti", "-f", "main.cpp", "-I", "include", "-o", "out.cpp"]);

        assert_eq!(
            cli.paths(),
            Some((Path::new("main.cpp"), Path::new("include")))
        );
        assert_eq!(cli.output, PathBuf::from("out.cpp"));
        assert_eq!(cli.flatten_options(), FlattenOptions::default());
    }

    #[test]
    fn output_defaults_to_stdout() {
        let cli = Cli::parse_from(["arti", "--file", "a.h", "--include", "."]);

        assert_eq!(cli.output, PathBuf::from("-"));
    }

    #[test]
    fn missing_include_dir_yields_no_paths() {
        let cli = Cli::parse_from(["arti", "-f", "main.cpp"]);

        assert_eq!(cli.paths(), None);
    }

    #[test]
    fn recursion_guards_can_be_tuned() {
        let cli = Cli::parse_from([
            "arti",
            "-f",
            "a.h",
            "-I",
            ".",
            "--max-depth",
            "3",
            "--no-cycle-check",
        ]);

        assert_eq!(
            cli.flatten_options(),
            FlattenOptions {
                max_depth: Some(3),
                detect_cycles: false,
            }
        );
    }
}
