//! Router module emission for the rove router compiler.
//!
//! The back half of the compiler: given the resolved routes from
//! `rove-core`, this crate deduplicates component imports, builds the nested
//! route-configuration expressions, and assembles the final module text that
//! the host bundler serves as a virtual file.
//!
//! Emission is pure string building over a fixed module shape. Absence
//! conditions (an empty route list) produce a minimal fallback module with
//! the same export surface. A resolved route referencing a component absent
//! from the import tables is a broken collector/builder contract and panics.
//!
//! ```
//! use rove_gen::{EmitOptions, emit_module};
//!
//! let opts = EmitOptions::new("/project");
//! let module = emit_module(&[], &opts);
//! assert!(module.contains("export const routes = []"));
//! ```

mod emit;
mod expr;
mod ident;
mod imports;
mod writer;

pub use emit::emit_module;
pub use imports::{ImportTables, collect_imports, module_specifier};

use std::path::PathBuf;

use rove_core::DEFAULT_EXTENSIONS;

/// Options for one emission pass.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Project root. Component paths under it become `/`-prefixed
    /// specifiers relative to this directory.
    pub root: PathBuf,
    /// Emit pages and layouts as deferred `lazy(() => import(..))`
    /// factories instead of static imports.
    pub lazy: bool,
    /// Not-found component declared at the app root, rendered by a final
    /// top-level catch-all route that replaces the whole page.
    pub root_not_found: Option<PathBuf>,
    /// Extensions stripped from import specifiers. Must match the list the
    /// scanner recognized, or specifiers come out inconsistent.
    pub extensions: Vec<String>,
}

impl EmitOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lazy: false,
            root_not_found: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn root_not_found(mut self, path: Option<PathBuf>) -> Self {
        self.root_not_found = path;
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
}
