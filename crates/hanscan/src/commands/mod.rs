//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod scan;

/// Read a file into memory with a path-bearing error message.
pub fn read_input_file(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
