//! Minimal JS object-literal rendering.
//!
//! The route-configuration array is the only nontrivial value the emitter
//! prints, so this stays deliberately small: objects with raw-expression
//! values and nested object arrays, two-space indentation, trailing commas.

pub(crate) enum JsValue {
    /// Pre-rendered expression, inserted verbatim.
    Raw(String),
    Array(Vec<JsObject>),
}

pub(crate) struct JsObject {
    pairs: Vec<(&'static str, JsValue)>,
}

impl JsObject {
    pub(crate) fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub(crate) fn raw(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, JsValue::Raw(value.into())));
        self
    }

    pub(crate) fn array(mut self, key: &'static str, items: Vec<JsObject>) -> Self {
        self.pairs.push((key, JsValue::Array(items)));
        self
    }

    /// Render with the opening brace at column `indent`. The caller places
    /// the first line; continuation lines indent relative to `indent`.
    pub(crate) fn render(&self, indent: usize) -> String {
        let field_pad = " ".repeat(indent + 2);
        let mut out = String::from("{\n");
        for (key, value) in &self.pairs {
            match value {
                JsValue::Raw(raw) => {
                    out.push_str(&format!("{field_pad}{key}: {raw},\n"));
                }
                JsValue::Array(items) => {
                    out.push_str(&format!("{field_pad}{key}: [\n"));
                    let item_pad = " ".repeat(indent + 4);
                    for item in items {
                        out.push_str(&item_pad);
                        out.push_str(&item.render(indent + 4));
                        out.push_str(",\n");
                    }
                    out.push_str(&format!("{field_pad}],\n"));
                }
            }
        }
        out.push_str(&" ".repeat(indent));
        out.push('}');
        out
    }
}

/// Double-quote a string for emission. Route patterns and specifiers only
/// ever contain path characters, but escape quotes and backslashes anyway.
pub(crate) fn quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
