//! Purpose: Convert a resolved node into a requested primitive under lenient rules.
//! Exports: `to_string`, `to_int64`, `to_float`, `to_sequence`, `to_mapping`.
//! Role: Coercion tables applied after navigation; each target is independent.
//! Invariants: Null always converts to the target's zero/absent value without error.
//! Invariants: Boolean converts to string and integer but never to float.
//! Invariants: Numeric strings fall back from integer parse to float parse (truncating).

use crate::core::error::{Error, ErrorKind};
use crate::core::node::{NodeKind, Target, value_preview};
use serde_json::{Map, Number, Value};

pub fn to_string(node: &Value) -> Result<String, Error> {
    match node {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_text(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(conversion(Target::String, other)),
    }
}

pub fn to_int64(node: &Value) -> Result<i64, Error> {
    match node {
        Value::Number(n) => Ok(n.as_i64().unwrap_or_else(|| truncate(number_f64(n)))),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Null => Ok(0),
        Value::String(s) => match s.parse::<i64>() {
            Ok(i) => Ok(i),
            Err(_) => parse_float(s, Target::Integer, node).map(truncate),
        },
        other => Err(conversion(Target::Integer, other)),
    }
}

pub fn to_float(node: &Value) -> Result<f64, Error> {
    match node {
        Value::Number(n) => Ok(number_f64(n)),
        Value::String(s) => parse_float(s, Target::Float, node),
        Value::Null => Ok(0.0),
        other => Err(conversion(Target::Float, other)),
    }
}

/// `None` means the node was absent.
pub fn to_sequence(node: &Value) -> Result<Option<&[Value]>, Error> {
    match node {
        Value::Array(items) => Ok(Some(items.as_slice())),
        Value::Null => Ok(None),
        other => Err(conversion(Target::Sequence, other)),
    }
}

/// `None` means the node was absent.
pub fn to_mapping(node: &Value) -> Result<Option<&Map<String, Value>>, Error> {
    match node {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => Err(conversion(Target::Mapping, other)),
    }
}

fn number_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    number_f64(n).to_string()
}

// Overflowing input parses to an infinity; only a spelled-out inf/nan may be non-finite.
fn parse_float(s: &str, target: Target, node: &Value) -> Result<f64, Error> {
    let f = s
        .parse::<f64>()
        .map_err(|err| conversion(target, node).with_source(err))?;
    if f.is_finite() || spells_non_finite(s) {
        return Ok(f);
    }
    Err(conversion(target, node)
        .with_message(format!("can not convert to {target}: value out of range")))
}

fn spells_non_finite(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word))
}

// `as` saturates at the i64 bounds and maps NaN to 0.
fn truncate(f: f64) -> i64 {
    f.trunc() as i64
}

fn conversion(target: Target, node: &Value) -> Error {
    let kind = NodeKind::of(node);
    tracing::debug!(%target, %kind, "can not convert json node");
    Error::new(ErrorKind::Conversion)
        .with_message(format!("can not convert to {target}"))
        .with_target(target)
        .with_node(kind)
        .with_value(value_preview(node))
}
