//! Purpose: Query handle pairing strict and lenient typed extraction over one document.
//! Exports: `Query`.
//! Role: Public entry point; each call re-walks the path from the root.
//! Invariants: The document is never mutated; a `Query` carries no cross-call state.
//! Invariants: Lenient accessors never surface an error; they fall back to the zero value.
//! Invariants: Strict accessors return navigator/coercer errors untouched.

use crate::core::coerce;
use crate::core::error::Error;
use crate::core::navigate;
use crate::core::path::{Segment, display_path};
use crate::json::parse;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Read-only view over a parsed JSON document.
///
/// ```
/// use jsonq::{api::Query, path};
///
/// let q = Query::from_str(r#"{"name": {"first": "Random", "last": "Farmer"}}"#).unwrap();
/// assert_eq!(q.string(&path!["name", "first"]), "Random");
/// assert_eq!(q.string(&path!["name", "middle"]), "");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Query<'a> {
    root: Cow<'a, Value>,
}

impl<'a> Query<'a> {
    /// Borrow an already-parsed document.
    pub fn new(root: &'a Value) -> Self {
        Self {
            root: Cow::Borrowed(root),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root.into_owned()
    }

    pub fn resolve(&self, path: &[Segment<'_>]) -> Result<&Value, Error> {
        navigate::resolve(&self.root, path)
    }

    pub fn try_string(&self, path: &[Segment<'_>]) -> Result<String, Error> {
        coerce::to_string(self.resolve(path)?)
    }

    pub fn try_int64(&self, path: &[Segment<'_>]) -> Result<i64, Error> {
        coerce::to_int64(self.resolve(path)?)
    }

    pub fn try_float(&self, path: &[Segment<'_>]) -> Result<f64, Error> {
        coerce::to_float(self.resolve(path)?)
    }

    pub fn try_sequence(&self, path: &[Segment<'_>]) -> Result<Option<&[Value]>, Error> {
        coerce::to_sequence(self.resolve(path)?)
    }

    pub fn try_mapping(&self, path: &[Segment<'_>]) -> Result<Option<&Map<String, Value>>, Error> {
        coerce::to_mapping(self.resolve(path)?)
    }

    pub fn string(&self, path: &[Segment<'_>]) -> String {
        lenient(path, self.try_string(path))
    }

    pub fn int64(&self, path: &[Segment<'_>]) -> i64 {
        lenient(path, self.try_int64(path))
    }

    /// Platform-width integer; values outside `isize` wrap.
    pub fn int(&self, path: &[Segment<'_>]) -> isize {
        self.int64(path) as isize
    }

    /// Reinterprets the signed value, so `-1` becomes `u64::MAX`.
    pub fn uint64(&self, path: &[Segment<'_>]) -> u64 {
        self.int64(path) as u64
    }

    pub fn float(&self, path: &[Segment<'_>]) -> f64 {
        lenient(path, self.try_float(path))
    }

    pub fn sequence(&self, path: &[Segment<'_>]) -> &[Value] {
        lenient(path, self.try_sequence(path)).unwrap_or_default()
    }

    pub fn mapping(&self, path: &[Segment<'_>]) -> Cow<'_, Map<String, Value>> {
        match lenient(path, self.try_mapping(path)) {
            Some(map) => Cow::Borrowed(map),
            None => Cow::Owned(Map::new()),
        }
    }
}

impl Query<'static> {
    /// Take ownership of an already-parsed document.
    pub fn from_value(root: Value) -> Self {
        Self {
            root: Cow::Owned(root),
        }
    }

    /// Parse a JSON byte slice; the parser's error is returned unchanged.
    pub fn from_slice(input: &[u8]) -> Result<Self, serde_json::Error> {
        parse::from_slice(input).map(Self::from_value)
    }

    /// Parse a JSON string; the parser's error is returned unchanged.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self, serde_json::Error> {
        parse::from_str(input).map(Self::from_value)
    }
}

impl From<Value> for Query<'static> {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

impl<'a> From<&'a Value> for Query<'a> {
    fn from(root: &'a Value) -> Self {
        Self::new(root)
    }
}

fn lenient<T: Default>(path: &[Segment<'_>], result: Result<T, Error>) -> T {
    result.unwrap_or_else(|err| {
        tracing::debug!(path = %display_path(path), error = %err, "absorbed query error");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::Query;
    use crate::core::error::ErrorKind;
    use crate::path;
    use serde_json::json;

    #[test]
    fn borrowed_and_owned_roots_agree() {
        let value = json!({"x": {"a": 17.5, "b": 2}});
        let borrowed = Query::new(&value);
        let owned = Query::from_value(value.clone());
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.float(&path!["x", "a"]), 17.5);
        assert_eq!(owned.into_value(), value);
    }

    #[test]
    fn float_product_with_missing_factor_is_zero() {
        let q = Query::from_str(r#"{"x": {"a": 17.5, "b": 2}}"#).unwrap();
        let (a, b, c) = (
            q.float(&path!["x", "a"]),
            q.float(&path!["x", "b"]),
            q.float(&path!["x", "c"]),
        );
        assert_eq!((a, b, c), (17.5, 2.0, 0.0));
        assert_eq!(a * b * c, 0.0);
    }

    #[test]
    fn strict_forms_propagate_navigation_errors() {
        let q = Query::from_value(json!({"simple": {"string": "yes"}}));
        let err = q.try_float(&path!["simple", 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnhandledNode);
        assert_eq!(q.float(&path!["simple", 0]), 0.0);
    }

    #[test]
    fn platform_and_unsigned_wrappers() {
        let q = Query::from_value(json!({"neg": -1, "big": "42.9"}));
        assert_eq!(q.int(&path!["big"]), 42);
        assert_eq!(q.uint64(&path!["big"]), 42);
        assert_eq!(q.uint64(&path!["neg"]), u64::MAX);
        assert_eq!(q.int(&path!["missing"]), 0);
    }

    #[test]
    fn lenient_collections_fall_back_to_empty() {
        let q = Query::from_value(json!({"list": [1, 2], "obj": {"k": "v"}, "s": "str"}));
        assert_eq!(q.sequence(&path!["list"]).len(), 2);
        assert!(q.sequence(&path!["s"]).is_empty());
        assert!(q.sequence(&path!["missing"]).is_empty());

        assert_eq!(q.mapping(&path!["obj"]).get("k"), Some(&json!("v")));
        assert!(q.mapping(&path!["list"]).is_empty());
        assert!(q.mapping(&path!["missing"]).is_empty());
    }

    #[test]
    fn resolve_exposes_raw_node() {
        let q = Query::from_value(json!({"a": [null, {"b": 1}]}));
        assert_eq!(q.resolve(&path!["a", 1, "b"]).unwrap(), &json!(1));
        assert!(std::ptr::eq(q.resolve(&[]).unwrap(), q.root()));
    }
}
