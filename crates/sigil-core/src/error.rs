//! Error types for the outer edges of the engine.
//!
//! Resolution itself never fails: unresolved references produce empty sets.
//! Errors only come from by-name lookups and configuration parsing.

use thiserror::Error;

/// Errors raised by name lookup and configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No object function has this name.
    #[error("Unknown object function: {0}")]
    UnknownObjectFunction(String),

    /// No identifier table has this name.
    #[error("Unknown identifier table: {0}")]
    UnknownIdsField(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ResolveError>;
