//! Generated identifier naming.

/// Identifier for a page component, derived from the route pattern plus a
/// monotonically increasing counter. The counter keeps identifiers unique
/// even when patterns collapse to nothing (`/` and `/:x` vs `/x`).
///
/// `/blog/:slug` with counter 2 becomes `PageBlogSlug2`.
pub(crate) fn route_ident(pattern: &str, n: usize) -> String {
    let mut name = String::from("Page");
    let mut upper_next = true;
    for ch in pattern.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                name.extend(ch.to_uppercase());
            } else {
                name.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    name.push_str(&n.to_string());
    name
}

/// Identifier for the auxiliary tables: `Layout0`, `Loading1`,
/// `ErrorBoundary0`, `NotFound2`.
pub(crate) fn counted_ident(prefix: &str, n: usize) -> String {
    format!("{prefix}{n}")
}
