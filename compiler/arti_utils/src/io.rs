//! IO helpers for reading source files and writing the flattened result
//!
//! The output side understands the usual `-` convention for standard output.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Reads a whole source file into a [`String`]
///
/// Bytes that are not valid UTF-8 (a Latin-1 comment in an old header, say)
/// are replaced with U+FFFD instead of failing the read.
///
/// # Errors
///
/// If the file cannot be opened or read, an error is returned.
pub fn read_source(path: &Path) -> Result<String, io::Error> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Returns `true` if `path` is the `-` placeholder for standard output
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Opens the output file and returns a writer
///
/// If the path is "-", it writes to standard output.
/// If the path is a regular file, it opens (or creates) the file for writing,
/// truncating it if it already exists.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if is_stdout(path) {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        )
    })
}
