//! Host-bundler boundary for the rove router compiler.
//!
//! The compiler itself is a pure function of the directory tree; this crate
//! owns everything around it that a host build tool talks to: the virtual
//! module id, the dev/build mode tag, the generator options, and the
//! generation context holding the cached module text with explicit
//! invalidation.
//!
//! The resolve/load pair lets a host treat the generated router module as if
//! it were a real file without ever writing one to disk:
//!
//! ```no_run
//! use rove_plugin::{Generator, GeneratorOptions, VIRTUAL_MODULE_ID};
//!
//! let options = GeneratorOptions::new("/project");
//! let mut generator = Generator::new(options).unwrap();
//!
//! let resolved = generator.resolve_id(VIRTUAL_MODULE_ID).unwrap();
//! let module = generator.load(resolved).unwrap();
//! println!("{module}");
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use rove_core::{CONVENTION_BASENAMES, DEFAULT_EXTENSIONS, Scanner, flatten};
use rove_gen::{EmitOptions, emit_module};

/// Module id the host imports: `import routes from "virtual:rove-routes"`.
pub const VIRTUAL_MODULE_ID: &str = "virtual:rove-routes";

/// Internal resolved id. The `\0` prefix marks the module as virtual so no
/// other resolver tries to read it from disk.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:rove-routes";

pub type Result<T> = std::result::Result<T, GeneratorError>;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Import specifiers are computed by stripping the root prefix, so a
    /// relative root would silently produce wrong specifiers.
    #[error("project root must be an absolute path: {0}")]
    RelativeRoot(PathBuf),
}

/// Which flavor of module to generate, chosen once at startup. Dev emits
/// deferred `lazy()` imports so the host can code-split and hot-swap pages;
/// build emits static imports for the production graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dev,
    Build,
}

impl Mode {
    pub fn lazy_imports(self) -> bool {
        matches!(self, Mode::Dev)
    }
}

/// Configuration for a generator instance.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Project root. Must be absolute.
    pub root: PathBuf,
    /// App directory to scan. Defaults to `<root>/app`.
    pub app_dir: PathBuf,
    /// Recognized extensions in priority order.
    pub extensions: Vec<String>,
    pub mode: Mode,
}

impl GeneratorOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let app_dir = root.join("app");
        Self {
            root,
            app_dir,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            mode: Mode::Dev,
        }
    }

    pub fn app_dir(mut self, app_dir: impl Into<PathBuf>) -> Self {
        self.app_dir = app_dir.into();
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

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// How a changed file relates to route generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A convention file under the app directory: the host should drop the
    /// cached module and force a full reload. No partial hot-swap of route
    /// structure is attempted.
    RouteConvention,
    /// Anything else, including co-located component files.
    Unrelated,
}

/// Generation context: options plus the cached module text.
///
/// Every generation performs a full rescan; the cache only spares the host
/// repeated work between file changes and must be invalidated explicitly.
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    cache: Option<String>,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        if !options.root.is_absolute() {
            return Err(GeneratorError::RelativeRoot(options.root));
        }
        Ok(Self {
            options,
            cache: None,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Map the public virtual module id to the resolved internal id.
    pub fn resolve_id(&self, specifier: &str) -> Option<&'static str> {
        (specifier == VIRTUAL_MODULE_ID).then_some(RESOLVED_VIRTUAL_MODULE_ID)
    }

    /// Serve the generated module for the resolved id, regenerating when no
    /// cached text exists. Returns `None` for ids that are not ours.
    pub fn load(&mut self, id: &str) -> Option<&str> {
        if id != RESOLVED_VIRTUAL_MODULE_ID {
            return None;
        }
        if self.cache.is_none() {
            self.cache = Some(self.generate());
        }
        self.cache.as_deref()
    }

    /// Run the full compile: scan, flatten, emit. Does not touch the cache.
    pub fn generate(&self) -> String {
        let scan = Scanner::new(&self.options.app_dir)
            .extensions(self.options.extensions.clone())
            .scan();
        let routes = flatten(&scan);
        info!(
            routes = routes.len(),
            mode = ?self.options.mode,
            "generated route module"
        );
        let emit_opts = EmitOptions::new(&self.options.root)
            .lazy(self.options.mode.lazy_imports())
            .root_not_found(scan.files.not_found.clone())
            .extensions(self.options.extensions.clone());
        emit_module(&routes, &emit_opts)
    }

    /// Drop the cached module text. The next `load` regenerates.
    pub fn invalidate(&mut self) {
        debug!("invalidated cached route module");
        self.cache = None;
    }

    /// Classify a changed file: a convention basename with a recognized
    /// extension under the app directory means the route structure may have
    /// changed.
    pub fn classify_change(&self, path: &Path) -> ChangeKind {
        if !path.starts_with(&self.options.app_dir) {
            return ChangeKind::Unrelated;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            return ChangeKind::Unrelated;
        };
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return ChangeKind::Unrelated;
        };
        if CONVENTION_BASENAMES.contains(&stem) && self.options.extensions.iter().any(|e| e == ext)
        {
            ChangeKind::RouteConvention
        } else {
            ChangeKind::Unrelated
        }
    }
}
