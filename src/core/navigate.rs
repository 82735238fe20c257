//! Purpose: Walk a path of segments from a document node to the node it names.
//! Exports: `resolve`.
//! Role: Navigator shared by every coercer and by `Query::resolve`.
//! Invariants: Null (or a miss) short-circuits the rest of the path and resolves to Null.
//! Invariants: Only a present node of the wrong shape for its segment is an error.
//! Invariants: The document is only ever borrowed; nothing is cloned on the walk.

use crate::core::error::{Error, ErrorKind};
use crate::core::node::{NodeKind, value_preview};
use crate::core::path::Segment;
use serde_json::Value;

static NULL: Value = Value::Null;

pub fn resolve<'v>(node: &'v Value, path: &[Segment<'_>]) -> Result<&'v Value, Error> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(node);
    };
    if node.is_null() {
        return Ok(node);
    }

    let child = match segment {
        Segment::Field(name) => by_field(node, name)?,
        Segment::Index(index) => by_index(node, *index)?,
    };
    if child.is_null() && !rest.is_empty() {
        tracing::trace!(segment = %segment, remaining = rest.len(), "path went absent");
    }
    resolve(child, rest)
}

fn by_field<'v>(node: &'v Value, name: &str) -> Result<&'v Value, Error> {
    match node {
        Value::Object(map) => Ok(map.get(name).unwrap_or(&NULL)),
        other => Err(unhandled(other, &format!(".{name}"), "field name needs a mapping")),
    }
}

fn by_index(node: &Value, index: usize) -> Result<&Value, Error> {
    match node {
        Value::Array(items) => Ok(items.get(index).unwrap_or(&NULL)),
        other => Err(unhandled(other, &format!("[{index}]"), "index needs a sequence")),
    }
}

fn unhandled(node: &Value, segment: &str, expected: &str) -> Error {
    let kind = NodeKind::of(node);
    tracing::debug!(%kind, segment, "unhandled json node");
    Error::new(ErrorKind::UnhandledNode)
        .with_message(format!("unhandled json node: {expected}"))
        .with_node(kind)
        .with_segment(segment)
        .with_value(value_preview(node))
}
