//! Context flattening: route tree to resolved route list.
//!
//! A depth-first walk accumulates the inherited context. Layouts are
//! cumulative (the child's layout is appended to the chain, outermost
//! first); loading, error, and not-found are nearest-wins (the child's own
//! file replaces the inherited value). Route groups pass their context
//! through untouched. Only directories owning a page file emit a route.

use indexmap::IndexMap;
use std::path::PathBuf;

use crate::model::{ConventionFiles, ResolvedRoute, RouteNode};
use crate::scan::AppScan;

/// Inherited context carried down the tree. Transient: built per flatten
/// pass, never stored.
#[derive(Debug, Clone, Default)]
struct RouteContext {
    layouts: Vec<PathBuf>,
    loading: Option<PathBuf>,
    error: Option<PathBuf>,
    not_found: Option<PathBuf>,
    layout_not_found: IndexMap<PathBuf, PathBuf>,
}

impl RouteContext {
    /// Effective context for a node owning `files`: append the node's layout
    /// to the chain, override the rest nearest-wins. A not-found file also
    /// registers against the innermost layout at or above it, which is where
    /// its catch-all branch attaches during emission.
    fn apply(&self, files: &ConventionFiles) -> RouteContext {
        let mut next = self.clone();
        if let Some(layout) = &files.layout {
            next.layouts.push(layout.clone());
        }
        if let Some(loading) = &files.loading {
            next.loading = Some(loading.clone());
        }
        if let Some(error) = &files.error {
            next.error = Some(error.clone());
        }
        if let Some(not_found) = &files.not_found {
            next.not_found = Some(not_found.clone());
            if let Some(owner) = next.layouts.last() {
                next.layout_not_found
                    .insert(owner.clone(), not_found.clone());
            }
        }
        next
    }

    fn resolve(&self, pattern: &str, page: &PathBuf) -> ResolvedRoute {
        ResolvedRoute {
            pattern: pattern.to_string(),
            page: page.clone(),
            layouts: self.layouts.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            not_found: self.not_found.clone(),
            layout_not_found: self.layout_not_found.clone(),
        }
    }
}

/// Flatten a scan into resolved routes in tree order. The implicit root
/// route (when the app root owns a page) is unshifted to the front so
/// consumers that rely on array order always evaluate it first.
pub fn flatten(scan: &AppScan) -> Vec<ResolvedRoute> {
    let mut root_ctx = RouteContext::default().apply(&scan.files);
    // The app root's own not-found is emitted as a top-level catch-all that
    // replaces the whole page, root layout included. Registering it under
    // the root layout as well would shadow that catch-all with a child one.
    if scan.files.not_found.is_some() {
        if let Some(layout) = &scan.files.layout {
            root_ctx.layout_not_found.shift_remove(layout);
        }
    }
    let mut out = Vec::new();
    for node in &scan.routes {
        flatten_node(node, &root_ctx, &mut out);
    }
    if let Some(page) = &scan.files.page {
        out.insert(0, root_ctx.resolve("/", page));
    }
    out
}

fn flatten_node(node: &RouteNode, inherited: &RouteContext, out: &mut Vec<ResolvedRoute>) {
    let ctx = inherited.apply(&node.files);
    if let Some(page) = &node.files.page {
        // A page directly inside a top-level group still maps to `/`.
        let pattern = if node.path.is_empty() {
            "/"
        } else {
            node.path.as_str()
        };
        out.push(ctx.resolve(pattern, page));
    }
    // Children inherit the effective context whether or not this node
    // emitted a route.
    for child in &node.children {
        flatten_node(child, &ctx, out);
    }
}
