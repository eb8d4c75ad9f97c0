//! Command implementations.

pub mod generate;
pub mod inspect;

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Resolve the project root: the `--root` flag if given, else the current
/// directory, made absolute.
pub(crate) fn resolve_root(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    Ok(match flag {
        Some(root) if root.is_absolute() => root,
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// Make a configured path absolute relative to the project root.
pub(crate) fn under_root(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
