//! Import collection and deduplication.
//!
//! Components are keyed by absolute path: a file referenced by any number of
//! routes is imported exactly once and keeps its first-assigned identifier
//! for every later reference. Insertion order is the emission order, so the
//! tables use `IndexMap`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rove_core::ResolvedRoute;

use crate::EmitOptions;
use crate::ident::{counted_ident, route_ident};

/// Path-to-identifier tables for every imported component kind.
#[derive(Debug, Clone, Default)]
pub struct ImportTables {
    pub pages: IndexMap<PathBuf, String>,
    pub layouts: IndexMap<PathBuf, String>,
    pub loading: IndexMap<PathBuf, String>,
    pub errors: IndexMap<PathBuf, String>,
    pub not_found: IndexMap<PathBuf, String>,
}

/// Build the import tables and the import statement block for a route list.
///
/// Statement order is fixed: router library, UI library, page imports in
/// route order, then first-seen layout / loading / error / not-found
/// imports, then the root not-found component if it was not already pulled
/// in by a route. Pages and layouts honor the lazy flag; fallback components
/// are always static imports.
pub fn collect_imports(routes: &[ResolvedRoute], opts: &EmitOptions) -> (ImportTables, String) {
    let mut tables = ImportTables::default();
    let mut lines: Vec<String> = Vec::new();

    lines.push(
        "import { createBrowserRouter, RouterProvider, Outlet } from \"react-router-dom\";"
            .to_string(),
    );
    if opts.lazy {
        lines.push("import { Suspense, createElement, lazy } from \"react\";".to_string());
    } else {
        lines.push("import { Suspense, createElement } from \"react\";".to_string());
    }

    for (n, route) in routes.iter().enumerate() {
        if tables.pages.contains_key(&route.page) {
            continue;
        }
        let ident = route_ident(&route.pattern, n);
        lines.push(component_import(&ident, &route.page, opts, opts.lazy));
        tables.pages.insert(route.page.clone(), ident);
    }

    for route in routes {
        for layout in &route.layouts {
            if tables.layouts.contains_key(layout) {
                continue;
            }
            let ident = counted_ident("Layout", tables.layouts.len());
            lines.push(component_import(&ident, layout, opts, opts.lazy));
            tables.layouts.insert(layout.clone(), ident);
        }
    }

    for route in routes {
        if let Some(loading) = &route.loading {
            if !tables.loading.contains_key(loading) {
                let ident = counted_ident("Loading", tables.loading.len());
                lines.push(component_import(&ident, loading, opts, false));
                tables.loading.insert(loading.clone(), ident);
            }
        }
    }

    for route in routes {
        if let Some(error) = &route.error {
            if !tables.errors.contains_key(error) {
                let ident = counted_ident("ErrorBoundary", tables.errors.len());
                lines.push(component_import(&ident, error, opts, false));
                tables.errors.insert(error.clone(), ident);
            }
        }
    }

    // Route-level not-founds first, then any that only appear in a layout
    // mapping (declared in a layout directory but overridden by every
    // descendant page).
    for route in routes {
        let mapped = route.layout_not_found.values();
        for not_found in route.not_found.iter().chain(mapped) {
            if !tables.not_found.contains_key(not_found) {
                let ident = counted_ident("NotFound", tables.not_found.len());
                lines.push(component_import(&ident, not_found, opts, false));
                tables.not_found.insert(not_found.clone(), ident);
            }
        }
    }

    if let Some(root_not_found) = &opts.root_not_found {
        if !tables.not_found.contains_key(root_not_found) {
            let ident = counted_ident("NotFound", tables.not_found.len());
            lines.push(component_import(&ident, root_not_found, opts, false));
            tables.not_found.insert(root_not_found.clone(), ident);
        }
    }

    let mut block = lines.join("\n");
    block.push('\n');
    (tables, block)
}

fn component_import(ident: &str, path: &Path, opts: &EmitOptions, lazy: bool) -> String {
    let specifier = module_specifier(path, &opts.root, &opts.extensions);
    if lazy {
        format!("const {ident} = lazy(() => import(\"{specifier}\"));")
    } else {
        format!("import {ident} from \"{specifier}\";")
    }
}

/// Convert an absolute component path into an import specifier: strip the
/// project root prefix, normalize separators to `/`, strip a recognized
/// extension, and lead with `/`. Paths outside the root keep their own
/// shape, `./`-prefixed when relative.
pub fn module_specifier(path: &Path, root: &Path, extensions: &[String]) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => format!("/{}", strip_extension(&forward_slashed(rel), extensions)),
        Err(_) => {
            let specifier = strip_extension(&forward_slashed(path), extensions);
            if path.is_absolute() {
                format!("/{specifier}")
            } else {
                format!("./{specifier}")
            }
        }
    }
}

fn forward_slashed(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            std::path::Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn strip_extension(specifier: &str, extensions: &[String]) -> String {
    for ext in extensions {
        if let Some(stem) = specifier.strip_suffix(&format!(".{ext}")) {
            return stem.to_string();
        }
    }
    specifier.to_string()
}
