//! Pluggable per-field tag query
//!
//! The walker depends only on this query's contract, not on how the
//! host stores its tags. The default implementation answers from the
//! tag recorded in the registry's side-table and carried on the
//! resolved descriptor.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

use crate::types::{FieldDescriptor, FieldTag};

/// Query answering which tag, if any, a field carries
///
/// The walker checks `Nested` before `Transform`, so an implementation
/// that could report both for one field still gets nested-precedence
/// behavior: the field is recursed into and never also transformed at
/// that level.
pub trait MetadataQuery {
    fn tag_of(&self, descriptor: &FieldDescriptor) -> FieldTag;
}

/// Default query: the tag declared in the schema side-table
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredTags;

impl MetadataQuery for DeclaredTags {
    fn tag_of(&self, descriptor: &FieldDescriptor) -> FieldTag {
        descriptor.tag
    }
}
