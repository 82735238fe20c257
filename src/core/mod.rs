// Core modules implementing path navigation, coercion, and error modeling.
pub mod coerce;
pub mod error;
pub mod navigate;
pub mod node;
pub mod path;
