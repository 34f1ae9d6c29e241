//! The `--version` banner

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// The package authors as a readable list
fn authors() -> String {
    match env!("CARGO_PKG_AUTHORS") {
        "" => "unknown".to_string(),
        authors => authors.replace(':', ", "),
    }
}

/// The commit this binary was built from, flagged if the tree was dirty
fn commit() -> String {
    match (build::SHORT_COMMIT, build::GIT_CLEAN) {
        ("", _) => "unknown commit".to_string(),
        (hash, true) => hash.to_string(),
        (hash, false) => format!("{hash} (tainted)"),
    }
}

/// Returns the text printed by `arti --version`
///
/// The name and version come first, then a blank line and right-aligned
/// `Author` and `Build` fields.
pub fn version() -> String {
    format!(
        concat!(
            "{name} version {version}\n\n",
            "       Author:  {authors}\n",
            "        Build:  {commit} for {target} at {time}"
        ),
        name = build::PROJECT_NAME,
        version = build::PKG_VERSION,
        authors = authors(),
        commit = commit(),
        target = build::BUILD_TARGET,
        time = build::BUILD_TIME_3339,
    )
}
