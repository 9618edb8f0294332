//! Fieldcloak Core - Metadata-driven field transformation for entity graphs
//!
//! This crate walks an entity object graph, discovers which fields are
//! tagged for transformation through a declarative schema side-table,
//! and rewrites each tagged field in place with the output of a
//! caller-supplied transform function - exactly once, using the
//! transform's marker suffix to detect already-transformed values.
//!
//! # Main Components
//!
//! - **Error Handling**: Fatal-only error types using `thiserror` and `anyhow`
//! - **Schema Registry**: Declarative type definitions with inheritance-aware
//!   flattening and caching
//! - **Access Protocol**: The [`Entity`] trait, a uniform read/write protocol
//!   over heterogeneous instance shapes
//! - **Processing Engine**: The [`FieldProcessor`] graph walker and the
//!   [`PersistHooks`] lifecycle adapter
//!
//! # Example
//!
//! ```no_run
//! use fieldcloak_core::{process, Entity, Result, SchemaRegistry, Transformer};
//!
//! fn example(
//!     registry: &SchemaRegistry,
//!     cipher: &dyn Transformer,
//!     user: &mut dyn Entity,
//! ) -> Result<()> {
//!     process(user, registry, cipher)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod processing;
pub mod schema;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use types::{
    // Schema definition types
    FieldDef, TypeDef,

    // Resolved schema types
    FieldDescriptor, FlattenedSchema,

    // Field classification
    FieldTag, Visibility,

    // Access protocol outcomes
    ReadOutcome, WriteOutcome,
};

pub use schema::SchemaRegistry;

pub use processing::{
    process, DeclaredTags, DeclaredType, Entity, FieldProcessor, MetadataQuery, PersistHooks,
    Transformer, TypeIdentity,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
