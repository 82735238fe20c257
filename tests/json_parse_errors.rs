//! Purpose: Regression coverage for the construction boundary.
//! Exports: Integration tests only.
//! Role: Verify parser failures surface as the underlying serde_json error.
//! Invariants: No wrapping; the error category from the parser is preserved.

use jsonq::api::Query;
use jsonq::path;
use serde_json::error::Category;
use serde_json::{Value, json};

#[test]
fn syntax_errors_surface_unchanged() {
    let err = Query::from_str(r#"{"a":}"#).unwrap_err();
    assert_eq!(err.classify(), Category::Syntax);

    let direct = serde_json::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(err.to_string(), direct.to_string());
}

#[test]
fn truncated_input_is_eof() {
    let err = Query::from_slice(br#"{"a": [1, 2"#).unwrap_err();
    assert_eq!(err.classify(), Category::Eof);
    assert!(err.is_eof());
}

#[test]
fn malformed_utf8_rejected() {
    let bad_utf8 = [0xff, 0xfe, b'{', b'}'];
    assert!(Query::from_slice(&bad_utf8).is_err());
}

#[test]
fn parsed_and_prebuilt_documents_query_alike() {
    let parsed = Query::from_slice(br#"{"nested":{"arr":[{"k":"v"}]}}"#).unwrap();
    let value = json!({"nested": {"arr": [{"k": "v"}]}});
    let built = Query::new(&value);

    let keys = path!["nested", "arr", 0, "k"];
    assert_eq!(parsed.string(&keys), "v");
    assert_eq!(parsed.string(&keys), built.string(&keys));
}

#[test]
fn scalar_roots_are_documents_too() {
    let q = Query::from_str("\"2.75\"").unwrap();
    assert_eq!(q.int64(&[]), 2);
    assert_eq!(q.float(&[]), 2.75);
    assert!(q.try_string(&path!["field"]).is_err());

    let null = Query::from_str("null").unwrap();
    assert_eq!(null.string(&path!["any", 3, "thing"]), "");
}
