//! Directory tree scanning.
//!
//! The scanner walks the app directory depth-first with `fs::read_dir`,
//! classifies each subdirectory name, locates convention files by trying the
//! recognized extensions in priority order, and sorts siblings at each level.
//! A missing app directory yields an empty scan, not an error.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::{ConventionFiles, RouteNode};
use crate::segment::classify;

/// Recognized file extensions, in priority order. When several convention
/// files share a basename the earliest extension wins.
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Basenames of the convention files the scanner looks for.
pub const CONVENTION_BASENAMES: &[&str] = &["page", "layout", "loading", "error", "not-found"];

/// Directory names that never produce routes.
const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "coverage",
];

/// Result of scanning an app directory: the convention files found at the
/// root itself plus the ordered route tree below it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppScan {
    /// Convention files directly in the app root. These seed the inherited
    /// context and define the implicit `/` route when a root page exists.
    pub files: ConventionFiles,
    pub routes: Vec<RouteNode>,
}

/// Recursive scanner for one app directory.
#[derive(Debug, Clone)]
pub struct Scanner {
    app_dir: PathBuf,
    extensions: Vec<String>,
}

impl Scanner {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Override the recognized extensions, keeping the given priority order.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Scan the app directory. A nonexistent directory is an absence
    /// condition, not a failure: the result is simply empty.
    pub fn scan(&self) -> AppScan {
        if !self.app_dir.is_dir() {
            warn!(app_dir = %self.app_dir.display(), "app directory not found, scanning nothing");
            return AppScan::default();
        }
        let files = self.convention_files(&self.app_dir);
        let routes = self.scan_dir(&self.app_dir, "");
        debug!(
            app_dir = %self.app_dir.display(),
            top_level = routes.len(),
            "scanned app directory"
        );
        AppScan { files, routes }
    }

    fn scan_dir(&self, dir: &Path, parent_path: &str) -> Vec<RouteNode> {
        let mut nodes = Vec::new();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), %err, "skipping unreadable directory");
                return nodes;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_skipped(&name) {
                continue;
            }

            let segment = classify(&name);
            let path = match segment.fragment.as_deref() {
                // Groups pass the parent pattern through unchanged.
                None => parent_path.to_string(),
                Some(fragment) => format!("{parent_path}/{fragment}"),
            };

            let child_dir = entry.path();
            let files = self.convention_files(&child_dir);
            let children = self.scan_dir(&child_dir, &path);
            nodes.push(RouteNode {
                segment: name,
                path,
                kind: segment.kind,
                param: segment.param,
                files,
                children,
            });
        }

        nodes.sort_by(segment_order);
        nodes
    }

    fn convention_files(&self, dir: &Path) -> ConventionFiles {
        ConventionFiles {
            page: self.find_file(dir, "page"),
            layout: self.find_file(dir, "layout"),
            loading: self.find_file(dir, "loading"),
            error: self.find_file(dir, "error"),
            not_found: self.find_file(dir, "not-found"),
        }
    }

    /// Try each extension in priority order, first hit wins.
    fn find_file(&self, dir: &Path, basename: &str) -> Option<PathBuf> {
        self.extensions.iter().find_map(|ext| {
            let candidate = dir.join(format!("{basename}.{ext}"));
            candidate.is_file().then_some(candidate)
        })
    }
}

/// Directories excluded from route generation: private (underscore-prefixed)
/// folders and the fixed ignore list.
fn is_skipped(name: &str) -> bool {
    name.starts_with('_') || IGNORED_DIRS.contains(&name)
}

/// Sibling ordering within one directory level: static segments first, then
/// dynamic, then catch-alls; ties broken by the raw directory name, brackets
/// and parentheses included. The name comparison is case-insensitive with a
/// byte-order tiebreak, which keeps ordering deterministic across platforms
/// and locales.
fn segment_order(a: &RouteNode, b: &RouteNode) -> Ordering {
    a.kind
        .order_rank()
        .cmp(&b.kind.order_rank())
        .then_with(|| lexical_cmp(&a.segment, &b.segment))
}

fn lexical_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
