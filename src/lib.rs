//! Purpose: Path-based navigation and lenient typed extraction over parsed JSON documents.
//! Exports: `api` (query handle, segments, errors), `core` (navigator, coercers), `path!`.
//! Role: Read-only library; callers parse (or hand over) a document and query it by path.
//! Invariants: Missing fields and out-of-range indices are absence, never errors.
//! Invariants: Documents are never mutated; queries carry no state between calls.
pub mod api;
pub mod core;
mod json;
