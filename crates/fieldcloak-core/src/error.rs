//! Error types for the Fieldcloak core library
//!
//! This module defines the error handling system for the engine,
//! using thiserror for ergonomic error definitions and anyhow for
//! opaque error sources crossing the transformer boundary.

use thiserror::Error;

/// Main error type for Fieldcloak operations
///
/// Only fatal conditions are represented here. Recoverable conditions
/// (a field without an accessor pair, an accessor that faults on read)
/// surface as [`crate::types::ReadOutcome`] values and are skipped by
/// the traversal rather than reported as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema resolution failed because the type (or one of its
    /// ancestors) has no registered definition
    #[error("Unresolvable type '{type_name}': no registered definition")]
    UnresolvableType { type_name: String },

    /// The external transform function failed; fatal for the current
    /// traversal, already-written sibling fields stay applied
    #[error("Transform failed for field '{field}' on type '{entity_type}'")]
    Transform {
        entity_type: String,
        field: String,
        #[source]
        source: anyhow::Error,
    },

    /// A type definition was rejected at registration time
    #[error("Schema definition error: {message}")]
    SchemaDefinition { message: String },

    /// JSON parsing errors while loading schema definitions
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors while loading schema definitions from disk
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
