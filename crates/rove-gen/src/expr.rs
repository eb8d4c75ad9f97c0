//! Route-configuration expression building.
//!
//! One resolved route becomes a nested configuration object: the innermost
//! entry carries the path (or index flag) and the suspense-wrapped page
//! element, and each inner layout of the chain wraps it in a pathless parent
//! configuration. The outermost layout is not handled here; the module
//! emitter groups routes under it.

use std::path::Path;

use rove_core::ResolvedRoute;

use crate::imports::ImportTables;
use crate::writer::{JsObject, quoted};

/// Build the configuration for one route, wrapped through every layout in
/// its chain except the outermost.
///
/// Panics when the route references a component missing from the import
/// tables; that is a collector/builder contract break, not user input.
pub(crate) fn build_route(route: &ResolvedRoute, tables: &ImportTables) -> JsObject {
    let page = lookup(&tables.pages, &route.page, route, "page");
    let loading = route
        .loading
        .as_deref()
        .map(|path| lookup(&tables.loading, path, route, "loading"));
    let error = route
        .error
        .as_deref()
        .map(|path| lookup(&tables.errors, path, route, "error"));

    let mut config = JsObject::new();
    if route.pattern == "/" {
        config = config.raw("index", "true");
    } else {
        config = config.raw("path", quoted(&route.pattern));
    }
    config = config.raw("element", suspense_element(page, loading));
    if let Some(error) = error {
        config = config.raw("errorElement", element(error));
    }

    // Wrap outward through the inner layouts. The outermost layout, if any,
    // becomes the top-level grouping and is attached by the emitter.
    for layout in route.layouts.iter().skip(1).rev() {
        let layout_ident = lookup(&tables.layouts, layout, route, "layout");
        let mut children = vec![config];
        if let Some(not_found) = route.layout_not_found.get(layout) {
            let ident = lookup(&tables.not_found, not_found, route, "not-found");
            children.push(catch_all(ident));
        }
        let mut wrapper = JsObject::new().raw("element", suspense_element(layout_ident, loading));
        if let Some(error) = error {
            wrapper = wrapper.raw("errorElement", element(error));
        }
        config = wrapper.array("children", children);
    }

    config
}

/// A `{ path: "*" }` configuration rendering a not-found component.
pub(crate) fn catch_all(not_found_ident: &str) -> JsObject {
    JsObject::new()
        .raw("path", quoted("*"))
        .raw("element", element(not_found_ident))
}

/// `createElement(Ident)`.
pub(crate) fn element(ident: &str) -> String {
    format!("createElement({ident})")
}

/// The deferred-loading boundary every page and layout element sits in. The
/// nearest loading component is the fallback; `null` when none is in scope.
pub(crate) fn suspense_element(ident: &str, loading_ident: Option<&str>) -> String {
    let fallback = match loading_ident {
        Some(loading) => element(loading),
        None => "null".to_string(),
    };
    format!("createElement(Suspense, {{ fallback: {fallback} }}, {})", element(ident))
}

fn lookup<'t>(
    table: &'t indexmap::IndexMap<std::path::PathBuf, String>,
    path: &Path,
    route: &ResolvedRoute,
    kind: &str,
) -> &'t str {
    match table.get(path) {
        Some(ident) => ident,
        None => panic!(
            "route {} references {} component {} missing from the import table",
            route.pattern,
            kind,
            path.display()
        ),
    }
}
