//! Purpose: Single error type for navigation and coercion failures.
//! Exports: `Error`, `ErrorKind`.
//! Role: Carries enough context (node kind, preview, segment, target) to diagnose a query.
//! Invariants: Only present nodes of the wrong shape produce errors; absence never does.
//! Invariants: Parse failures from string coercion are attached as `source`, not flattened.

use crate::core::node::{NodeKind, Target};
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A field name was applied to a non-mapping, or an index to a non-sequence.
    UnhandledNode,
    /// A dynamic path argument was neither a string nor a non-negative integer.
    UnsupportedSegment,
    /// A resolved node could not be converted to the requested type.
    Conversion,
}

impl ErrorKind {
    pub fn is_structural(self) -> bool {
        matches!(self, Self::UnhandledNode | Self::UnsupportedSegment)
    }

    pub fn is_conversion(self) -> bool {
        matches!(self, Self::Conversion)
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    node: Option<NodeKind>,
    target: Option<Target>,
    value: Option<String>,
    segment: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            node: None,
            target: None,
            value: None,
            segment: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }

    pub fn is_conversion(&self) -> bool {
        self.kind.is_conversion()
    }

    pub fn node(&self) -> Option<NodeKind> {
        self.node
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_node(mut self, node: NodeKind) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(target) = self.target {
            write!(f, " (target: {target})")?;
        }
        if let Some(node) = self.node {
            write!(f, " (node: {node})")?;
        }
        if let Some(segment) = &self.segment {
            write!(f, " (segment: {segment})")?;
        }
        if let Some(value) = &self.value {
            write!(f, " (value: {value})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
