//! Purpose: Define the stable public API boundary for jsonq.
//! Exports: `Query`, path segments, error and kind types.
//! Role: Public, additive-only surface over the navigator and coercers.
//! Invariants: Everything a caller needs to query a document is reachable from here.

mod query;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::node::{NodeKind, Target};
pub use crate::core::path::{Segment, display_path, segments_from_values};
pub use query::Query;
