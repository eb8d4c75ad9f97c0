//! Module emission tests over hand-built resolved routes.

use std::path::PathBuf;

use indexmap::IndexMap;
use rove_core::ResolvedRoute;
use rove_gen::{EmitOptions, emit_module};

fn route(pattern: &str, page: &str) -> ResolvedRoute {
    ResolvedRoute {
        pattern: pattern.to_string(),
        page: PathBuf::from(page),
        layouts: Vec::new(),
        loading: None,
        error: None,
        not_found: None,
        layout_not_found: IndexMap::new(),
    }
}

fn opts() -> EmitOptions {
    EmitOptions::new("/project")
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn root_page_only_emits_index_route() {
    let routes = vec![route("/", "/project/app/page.tsx")];
    let module = emit_module(&routes, &opts());

    assert!(module.contains("import Page0 from \"/app/page\";"));
    assert!(module.contains("index: true,"));
    assert!(!module.contains("path:"));
    assert!(module.contains("export const routes = ["));
    assert!(module.contains("export const router = createBrowserRouter(routes);"));
    assert!(module.contains("export default function AppRouter()"));
}

#[test]
fn empty_route_list_keeps_the_export_surface() {
    let module = emit_module(&[], &opts());

    assert!(module.contains("export const routes = [];"));
    assert!(module.contains("export const router = createBrowserRouter(routes);"));
    assert!(module.contains("export default function AppRouter()"));
    assert!(module.contains("react-router-dom"));
}

#[test]
fn routes_sharing_a_layout_group_under_one_entry() {
    let layout = PathBuf::from("/project/app/layout.tsx");
    let mut home = route("/", "/project/app/page.tsx");
    home.layouts = vec![layout.clone()];
    let mut about = route("/about", "/project/app/about/page.tsx");
    about.layouts = vec![layout.clone()];

    let module = emit_module(&[home, about], &opts());

    // One import for the shared layout regardless of how many routes use it.
    assert_eq!(count(&module, "import Layout0 from \"/app/layout\";"), 1);
    // One grouping entry holding both children.
    assert_eq!(count(&module, "createElement(Layout0)"), 1);
    assert!(module.contains("index: true,"));
    assert!(module.contains("path: \"/about\","));
    assert!(module.contains("children: ["));
}

#[test]
fn lazy_mode_defers_pages_and_layouts() {
    let mut home = route("/", "/project/app/page.tsx");
    home.layouts = vec![PathBuf::from("/project/app/layout.tsx")];
    home.loading = Some(PathBuf::from("/project/app/loading.tsx"));

    let module = emit_module(&[home], &opts().lazy(true));

    assert!(module.contains("import { Suspense, createElement, lazy } from \"react\";"));
    assert!(module.contains("const Page0 = lazy(() => import(\"/app/page\"));"));
    assert!(module.contains("const Layout0 = lazy(() => import(\"/app/layout\"));"));
    // Fallback components stay static even in lazy mode.
    assert!(module.contains("import Loading0 from \"/app/loading\";"));
}

#[test]
fn static_mode_uses_direct_imports() {
    let module = emit_module(&[route("/", "/project/app/page.tsx")], &opts());

    assert!(module.contains("import { Suspense, createElement } from \"react\";"));
    assert!(module.contains("import Page0 from \"/app/page\";"));
    assert!(!module.contains("lazy("));
}

#[test]
fn loading_component_becomes_the_suspense_fallback() {
    let mut home = route("/", "/project/app/page.tsx");
    home.loading = Some(PathBuf::from("/project/app/loading.tsx"));

    let module = emit_module(&[home], &opts());
    assert!(module.contains(
        "createElement(Suspense, { fallback: createElement(Loading0) }, createElement(Page0))"
    ));
}

#[test]
fn missing_loading_falls_back_to_null() {
    let module = emit_module(&[route("/", "/project/app/page.tsx")], &opts());
    assert!(module.contains("createElement(Suspense, { fallback: null }, createElement(Page0))"));
}

#[test]
fn error_component_attaches_error_element() {
    let mut users = route("/admin/users", "/project/app/admin/users/page.tsx");
    users.error = Some(PathBuf::from("/project/app/admin/error.tsx"));

    let module = emit_module(&[users], &opts());
    assert!(module.contains("import ErrorBoundary0 from \"/app/admin/error\";"));
    assert!(module.contains("errorElement: createElement(ErrorBoundary0),"));
}

#[test]
fn inner_layouts_nest_inside_the_group() {
    let root_layout = PathBuf::from("/project/app/layout.tsx");
    let docs_layout = PathBuf::from("/project/app/docs/layout.tsx");
    let mut guides = route("/docs/guides", "/project/app/docs/guides/page.tsx");
    guides.layouts = vec![root_layout, docs_layout.clone()];
    guides.layout_not_found.insert(
        docs_layout,
        PathBuf::from("/project/app/docs/not-found.tsx"),
    );

    let module = emit_module(&[guides], &opts());

    assert!(module.contains("import Layout0 from \"/app/layout\";"));
    assert!(module.contains("import Layout1 from \"/app/docs/layout\";"));
    assert!(module.contains("import NotFound0 from \"/app/docs/not-found\";"));
    // The inner layout carries its own catch-all sibling for the not-found
    // declared below it.
    assert!(module.contains("path: \"*\","));
    assert!(module.contains("element: createElement(NotFound0),"));
    // Inner layout element nests under the outer grouping.
    let outer = module.find("createElement(Layout0)").unwrap();
    let inner = module.find("createElement(Layout1)").unwrap();
    assert!(outer < inner);
}

#[test]
fn root_not_found_appends_a_final_catch_all() {
    let mut home = route("/", "/project/app/page.tsx");
    home.layouts = vec![PathBuf::from("/project/app/layout.tsx")];

    let module = emit_module(
        &[home],
        &opts().root_not_found(Some(PathBuf::from("/project/app/not-found.tsx"))),
    );

    assert!(module.contains("import NotFound0 from \"/app/not-found\";"));
    let catch_all = module.find("path: \"*\",").unwrap();
    let layout = module.find("createElement(Layout0)").unwrap();
    // The catch-all is a sibling after the layout group, not a child.
    assert!(catch_all > layout);
}

#[test]
fn dynamic_patterns_render_quoted_paths() {
    let module = emit_module(&[route("/blog/:slug", "/project/app/blog/[slug]/page.tsx")], &opts());
    assert!(module.contains("path: \"/blog/:slug\","));
    assert!(module.contains("import PageBlogSlug0 from \"/app/blog/[slug]/page\";"));
}

#[test]
fn custom_extensions_strip_in_emitted_specifiers() {
    let routes = vec![route("/", "/project/app/page.vue")];
    let module = emit_module(&routes, &opts().extensions(["vue"]));
    assert!(module.contains("import Page0 from \"/app/page\";"));
}

#[test]
fn shared_components_import_once_and_reuse_identifiers() {
    let loading = PathBuf::from("/project/app/loading.tsx");
    let mut a = route("/a", "/project/app/a/page.tsx");
    a.loading = Some(loading.clone());
    let mut b = route("/b", "/project/app/b/page.tsx");
    b.loading = Some(loading);

    let module = emit_module(&[a, b], &opts());
    assert_eq!(count(&module, "import Loading0 from \"/app/loading\";"), 1);
    assert_eq!(count(&module, "fallback: createElement(Loading0)"), 2);
}
