//! Owned value types for the route tree and the flattened route list.
//!
//! Both structures are plain recursive values rebuilt on every scan. No
//! arena, no interning: a generation pass is self-contained and the tree is
//! discarded after flattening.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::segment::SegmentKind;

/// Convention files found directly in one directory. Absolute paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConventionFiles {
    pub page: Option<PathBuf>,
    pub layout: Option<PathBuf>,
    pub loading: Option<PathBuf>,
    pub error: Option<PathBuf>,
    pub not_found: Option<PathBuf>,
}

impl ConventionFiles {
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.layout.is_none()
            && self.loading.is_none()
            && self.error.is_none()
            && self.not_found.is_none()
    }
}

/// One directory in the route tree.
///
/// Children are produced only by subdirectories, never files, and are sorted
/// per level (static, then dynamic, then catch-all). Immutable after the
/// scan that builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteNode {
    /// Raw directory name, brackets and parentheses included.
    pub segment: String,
    /// Accumulated URL pattern up to and including this node. Empty for a
    /// top-level group; groups pass the parent pattern through unchanged.
    pub path: String,
    pub kind: SegmentKind,
    /// Parameter name for dynamic and catch-all segments.
    pub param: Option<String>,
    pub files: ConventionFiles,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn is_group(&self) -> bool {
        self.kind == SegmentKind::Group
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == SegmentKind::Dynamic
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::CatchAll | SegmentKind::OptionalCatchAll
        )
    }
}

/// One emittable route: a URL pattern plus the page that renders it and the
/// context inherited from its ancestor directories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    /// Final URL pattern with a leading slash. Parameters appear as `:name`,
    /// catch-alls as `*`.
    pub pattern: String,
    /// Absolute path of the page file. Always present.
    pub page: PathBuf,
    /// Layout chain, outermost first. The root layout, if any, is shared by
    /// every route under the directory that declares it.
    pub layouts: Vec<PathBuf>,
    /// Nearest ancestor-or-own loading component.
    pub loading: Option<PathBuf>,
    /// Nearest ancestor-or-own error component.
    pub error: Option<PathBuf>,
    /// Nearest ancestor-or-own not-found component.
    pub not_found: Option<PathBuf>,
    /// For each layout in the chain that has a not-found declared at or
    /// below it, the not-found path to attach as a catch-all under that
    /// layout. Keyed by layout path, insertion order follows the chain.
    pub layout_not_found: IndexMap<PathBuf, PathBuf>,
}
