//! Generator boundary tests: resolve/load, caching, change classification.

use std::fs;
use std::path::Path;

use rove_plugin::{
    ChangeKind, Generator, GeneratorOptions, Mode, RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID,
};
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "export default () => null;\n").unwrap();
}

fn generator(root: &Path) -> Generator {
    Generator::new(GeneratorOptions::new(root)).unwrap()
}

#[test]
fn rejects_relative_root() {
    let err = Generator::new(GeneratorOptions::new("relative/root")).unwrap_err();
    assert!(err.to_string().contains("absolute"));
}

#[test]
fn resolves_only_the_virtual_id() {
    let dir = TempDir::new().unwrap();
    let generator = generator(dir.path());

    assert_eq!(
        generator.resolve_id(VIRTUAL_MODULE_ID),
        Some(RESOLVED_VIRTUAL_MODULE_ID)
    );
    assert_eq!(generator.resolve_id("./app/page.tsx"), None);
    assert_eq!(generator.resolve_id("react"), None);
}

#[test]
fn load_ignores_foreign_ids() {
    let dir = TempDir::new().unwrap();
    let mut generator = generator(dir.path());
    assert_eq!(generator.load("./app/page.tsx"), None);
}

#[test]
fn missing_app_dir_loads_the_fallback_module() {
    let dir = TempDir::new().unwrap();
    let mut generator = generator(dir.path());

    let module = generator.load(RESOLVED_VIRTUAL_MODULE_ID).unwrap();
    assert!(module.contains("export const routes = [];"));
    assert!(module.contains("export default function AppRouter()"));
}

#[test]
fn load_caches_until_invalidated() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/page.tsx");
    let mut generator = generator(dir.path());

    let first = generator.load(RESOLVED_VIRTUAL_MODULE_ID).unwrap().to_string();
    assert!(first.contains("/app/page"));

    // A change on disk is not picked up while the cache holds.
    touch(dir.path(), "app/about/page.tsx");
    let cached = generator.load(RESOLVED_VIRTUAL_MODULE_ID).unwrap().to_string();
    assert_eq!(first, cached);

    generator.invalidate();
    let regenerated = generator.load(RESOLVED_VIRTUAL_MODULE_ID).unwrap();
    assert!(regenerated.contains("/app/about/page"));
}

#[test]
fn dev_mode_emits_lazy_imports_build_mode_static() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/page.tsx");

    let dev = Generator::new(GeneratorOptions::new(dir.path()).mode(Mode::Dev)).unwrap();
    assert!(dev.generate().contains("lazy(() => import(\"/app/page\"))"));

    let build = Generator::new(GeneratorOptions::new(dir.path()).mode(Mode::Build)).unwrap();
    assert!(build.generate().contains("import Page0 from \"/app/page\";"));
}

#[test]
fn root_not_found_flows_into_the_module() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/page.tsx");
    touch(dir.path(), "app/not-found.tsx");

    let generator = generator(dir.path());
    let module = generator.generate();
    assert!(module.contains("import NotFound0 from \"/app/not-found\";"));
    assert!(module.contains("path: \"*\","));
}

#[test]
fn configured_extensions_reach_the_emitted_specifiers() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/page.vue");

    let generator =
        Generator::new(GeneratorOptions::new(dir.path()).extensions(["vue"])).unwrap();
    let module = generator.generate();
    assert!(module.contains("import Page0 from \"/app/page\";"));
}

#[test]
fn root_not_found_with_root_layout_emits_one_top_level_catch_all() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/layout.tsx");
    touch(dir.path(), "app/page.tsx");
    touch(dir.path(), "app/not-found.tsx");

    let module = generator(dir.path()).generate();
    // The not-found renders exactly once: as the final top-level catch-all
    // that replaces the whole page, root layout included. A second copy
    // under the layout group would shadow it.
    assert_eq!(module.matches("createElement(NotFound0)").count(), 1);
    assert!(module.ends_with(
        "  {\n    path: \"*\",\n    element: createElement(NotFound0),\n  },\n];\n\
         \nexport const router = createBrowserRouter(routes);\n\
         \nexport default function AppRouter() {\n  return createElement(RouterProvider, { router });\n}\n"
    ));
}

#[test]
fn classifies_convention_changes_under_the_app_dir() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "app/page.tsx");
    let generator = generator(dir.path());

    let convention = [
        "app/page.tsx",
        "app/blog/[slug]/layout.ts",
        "app/not-found.jsx",
        "app/loading.js",
        "app/deep/error.tsx",
    ];
    for rel in convention {
        assert_eq!(
            generator.classify_change(&dir.path().join(rel)),
            ChangeKind::RouteConvention,
            "{rel}"
        );
    }

    let unrelated = [
        "app/components/button.tsx", // not a convention basename
        "app/page.css",              // unrecognized extension
        "src/page.tsx",              // outside the app dir
        "app/page",                  // no extension
    ];
    for rel in unrelated {
        assert_eq!(
            generator.classify_change(&dir.path().join(rel)),
            ChangeKind::Unrelated,
            "{rel}"
        );
    }
}
