//! Purpose: Provide the JSON decode entrypoints used to build query documents.
//! Exports: `from_slice`, `from_str`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Parser errors are returned unchanged; callers add no wrapping.
//! Notes: Documents are generic `Value` trees; typed decoding is out of scope here.

use serde::de::DeserializeOwned;

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}
