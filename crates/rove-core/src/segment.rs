//! Directory-name classification.
//!
//! One directory name maps to exactly one segment kind. The checks run in a
//! fixed priority order: group, optional catch-all, catch-all, dynamic,
//! static. Classification is total: malformed bracket syntax (unbalanced
//! `[name`, empty `[]`) falls through to the static case with the literal
//! name as its URL fragment, it never raises.

use serde::Serialize;

/// What kind of route segment a directory name represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Literal path segment.
    Static,
    /// `(name)` - organizes files without contributing a URL fragment.
    Group,
    /// `[name]` - named URL parameter.
    Dynamic,
    /// `[...name]` - required wildcard.
    CatchAll,
    /// `[[...name]]` - optional wildcard.
    OptionalCatchAll,
}

impl SegmentKind {
    /// Sort category for sibling ordering: static and group segments first,
    /// dynamic segments next, catch-alls last.
    pub(crate) fn order_rank(self) -> u8 {
        match self {
            SegmentKind::Static | SegmentKind::Group => 0,
            SegmentKind::Dynamic => 1,
            SegmentKind::CatchAll | SegmentKind::OptionalCatchAll => 2,
        }
    }
}

/// A classified directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// URL fragment this segment contributes. `None` for groups.
    pub fragment: Option<String>,
    /// Parameter name for dynamic and catch-all segments.
    pub param: Option<String>,
}

/// Classify one directory name. First matching rule wins.
pub fn classify(name: &str) -> Segment {
    if unwrap_delimited(name, "(", ")").is_some() {
        return Segment {
            kind: SegmentKind::Group,
            fragment: None,
            param: None,
        };
    }
    if let Some(inner) = unwrap_delimited(name, "[[...", "]]") {
        return Segment {
            kind: SegmentKind::OptionalCatchAll,
            fragment: Some("*".to_string()),
            param: Some(inner.to_string()),
        };
    }
    if let Some(inner) = unwrap_delimited(name, "[...", "]") {
        return Segment {
            kind: SegmentKind::CatchAll,
            fragment: Some("*".to_string()),
            param: Some(inner.to_string()),
        };
    }
    if let Some(inner) = unwrap_delimited(name, "[", "]") {
        return Segment {
            kind: SegmentKind::Dynamic,
            fragment: Some(format!(":{inner}")),
            param: Some(inner.to_string()),
        };
    }
    Segment {
        kind: SegmentKind::Static,
        fragment: Some(name.to_string()),
        param: None,
    }
}

/// Strip `prefix` and `suffix` and return the inner name, requiring it to be
/// non-empty. Empty delimiters like `[]` or `()` are not segments and fall
/// through to static classification.
fn unwrap_delimited<'a>(name: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(suffix))
        .filter(|inner| !inner.is_empty())
}
