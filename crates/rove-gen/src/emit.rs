//! Final module assembly.
//!
//! Routes sharing the same outermost layout are grouped under one top-level
//! pathless configuration with that layout as element; layout-less routes
//! stay top-level on their own. A root not-found component appends a final
//! top-level catch-all, a sibling of every layout group, so it replaces the
//! entire page including the root layout.

use std::path::PathBuf;

use indexmap::IndexMap;
use rove_core::ResolvedRoute;

use crate::EmitOptions;
use crate::expr::{build_route, catch_all, suspense_element};
use crate::imports::collect_imports;
use crate::writer::JsObject;

const HEADER: &str = "// Generated by rove. Do not edit by hand.";

/// Emit the full router module for a resolved route list.
///
/// An empty list produces a minimal fallback module with the same export
/// surface: the default entry component, the `router` instance, and the raw
/// `routes` array.
pub fn emit_module(routes: &[ResolvedRoute], opts: &EmitOptions) -> String {
    if routes.is_empty() {
        return emit_empty(opts);
    }

    let (tables, imports) = collect_imports(routes, opts);

    // Group by outermost layout in first-appearance order.
    let mut grouped: IndexMap<PathBuf, (Vec<JsObject>, Option<PathBuf>)> = IndexMap::new();
    let mut top_level: Vec<TopLevel> = Vec::new();
    for route in routes {
        let config = build_route(route, &tables);
        match route.layouts.first() {
            None => top_level.push(TopLevel::Single(config)),
            Some(layout) => {
                if !grouped.contains_key(layout) {
                    top_level.push(TopLevel::Group(layout.clone()));
                }
                let (children, not_found) = grouped.entry(layout.clone()).or_default();
                children.push(config);
                // First mapped not-found across the group wins.
                if not_found.is_none() {
                    *not_found = route.layout_not_found.get(layout).cloned();
                }
            }
        }
    }

    let mut entries: Vec<JsObject> = Vec::new();
    for item in top_level {
        match item {
            TopLevel::Single(config) => entries.push(config),
            TopLevel::Group(layout) => {
                let layout_ident = tables.layouts.get(&layout).unwrap_or_else(|| {
                    panic!(
                        "layout {} missing from the import table",
                        layout.display()
                    )
                });
                let (mut children, not_found) = grouped.shift_remove(&layout).unwrap_or_default();
                if let Some(not_found) = not_found {
                    let ident = tables.not_found.get(&not_found).unwrap_or_else(|| {
                        panic!(
                            "not-found {} missing from the import table",
                            not_found.display()
                        )
                    });
                    children.push(catch_all(ident));
                }
                entries.push(
                    JsObject::new()
                        .raw("element", suspense_element(layout_ident, None))
                        .array("children", children),
                );
            }
        }
    }

    if let Some(root_not_found) = &opts.root_not_found {
        if let Some(ident) = tables.not_found.get(root_not_found) {
            entries.push(catch_all(ident));
        }
    }

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&imports);
    out.push('\n');
    out.push_str("export const routes = [\n");
    for entry in &entries {
        out.push_str("  ");
        out.push_str(&entry.render(2));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out.push_str(&footer());
    out
}

enum TopLevel {
    Single(JsObject),
    Group(PathBuf),
}

fn emit_empty(_opts: &EmitOptions) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(
        "import { createBrowserRouter, RouterProvider, Outlet } from \"react-router-dom\";\n",
    );
    out.push_str("import { Suspense, createElement } from \"react\";\n");
    out.push('\n');
    out.push_str("export const routes = [];\n");
    out.push_str(&footer());
    out
}

fn footer() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("export const router = createBrowserRouter(routes);\n");
    out.push('\n');
    out.push_str("export default function AppRouter() {\n");
    out.push_str("  return createElement(RouterProvider, { router });\n");
    out.push_str("}\n");
    out
}
