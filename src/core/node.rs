//! Purpose: Name the shapes a document node can take and the shapes a caller can ask for.
//! Exports: `NodeKind`, `Target`, `value_preview`, `VALUE_PREVIEW_LIMIT`.
//! Role: Shared vocabulary for navigator/coercer diagnostics.
//! Invariants: `NodeKind` covers every `serde_json::Value` variant exactly once.
//! Invariants: Previews are compact JSON, cut on a char boundary at the limit.

use serde_json::Value;
use std::fmt;

/// Maximum number of characters of a node rendered into an error.
pub const VALUE_PREVIEW_LIMIT: usize = 80;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Null,
    Boolean,
    Number,
    String,
    Sequence,
    Mapping,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Mapping,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type a coercer converts a resolved node into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Target {
    String,
    Integer,
    Float,
    Sequence,
    Mapping,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn value_preview(value: &Value) -> String {
    let rendered = value.to_string();
    match rendered.char_indices().nth(VALUE_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &rendered[..cut]),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, VALUE_PREVIEW_LIMIT, value_preview};
    use serde_json::json;

    #[test]
    fn kind_covers_every_variant() {
        let cases = [
            (json!(null), NodeKind::Null),
            (json!(true), NodeKind::Boolean),
            (json!(1.5), NodeKind::Number),
            (json!("x"), NodeKind::String),
            (json!([1]), NodeKind::Sequence),
            (json!({"a": 1}), NodeKind::Mapping),
        ];

        for (value, kind) in cases {
            assert_eq!(NodeKind::of(&value), kind);
        }
    }

    #[test]
    fn preview_is_compact_and_bounded() {
        assert_eq!(value_preview(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);

        let long = json!("é".repeat(200));
        let preview = value_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), VALUE_PREVIEW_LIMIT + 3);
    }
}
