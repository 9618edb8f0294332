//! Field-transformation engine for entity object graphs
//!
//! This module implements the traversal that discovers tagged fields
//! through the schema side-table, reads them through the uniform
//! access protocol, and rewrites them in place with transformed
//! values — exactly once per value, witnessed by the transform
//! marker suffix.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

pub mod access;
pub mod gate;
pub mod hooks;
pub mod identity;
pub mod metadata;
pub mod transformer;

pub use access::Entity;
pub use hooks::PersistHooks;
pub use identity::{DeclaredType, TypeIdentity};
pub use metadata::{DeclaredTags, MetadataQuery};
pub use transformer::Transformer;

use crate::error::{Error, Result};
use crate::schema::SchemaRegistry;
use crate::types::{FieldDescriptor, FieldTag, ReadOutcome, Visibility, WriteOutcome};

static DECLARED_TAGS: DeclaredTags = DeclaredTags;
static DECLARED_TYPE: DeclaredType = DeclaredType;

/// Graph walker over an entity and its embedded sub-objects
///
/// Borrows the schema registry and the external transformer for the
/// duration of a processing pass. The metadata query and type-identity
/// adapter default to the registry side-table and the instance's own
/// declared type; hosts with other tag stores or proxying frameworks
/// override them builder-style.
pub struct FieldProcessor<'a> {
    registry: &'a SchemaRegistry,
    transformer: &'a dyn Transformer,
    metadata: &'a dyn MetadataQuery,
    identity: &'a dyn TypeIdentity,
}

impl<'a> FieldProcessor<'a> {
    /// Create a processor with the default metadata query and type
    /// identity
    pub fn new(registry: &'a SchemaRegistry, transformer: &'a dyn Transformer) -> Self {
        Self {
            registry,
            transformer,
            metadata: &DECLARED_TAGS,
            identity: &DECLARED_TYPE,
        }
    }

    /// Override the per-field tag query
    pub fn with_metadata(mut self, metadata: &'a dyn MetadataQuery) -> Self {
        self.metadata = metadata;
        self
    }

    /// Override the type-identity adapter
    pub fn with_identity(mut self, identity: &'a dyn TypeIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Process one entity graph in place
    ///
    /// For each field in the type's flattened schema, in schema order:
    /// a nested-tagged field is recursed into depth-first when present;
    /// a transform-tagged field is rewritten with the transformer's
    /// output (unconditionally for public fields, gated on the marker
    /// suffix for accessor-backed ones); untagged fields are skipped.
    /// Returns the same instance for chaining.
    ///
    /// The graph is assumed to be an acyclic tree of embeddings; a
    /// self-referential embedding would recurse without bound.
    ///
    /// # Errors
    ///
    /// [`Error::UnresolvableType`] when the instance's type (or an
    /// ancestor) has no registered definition, and [`Error::Transform`]
    /// when the external transform fails. Fields already rewritten
    /// earlier in the pass stay applied.
    pub fn process<'e>(&self, entity: &'e mut dyn Entity) -> Result<&'e mut dyn Entity> {
        let type_name = self.identity.real_type_of(entity);
        let schema = self.registry.resolve(&type_name)?;

        for descriptor in schema.iter() {
            match self.metadata.tag_of(descriptor) {
                FieldTag::Nested => {
                    if let Some(child) = entity.nested_field_mut(&descriptor.name) {
                        log::debug!(
                            "descending into nested field '{}.{}'",
                            type_name,
                            descriptor.name
                        );
                        self.process(child)?;
                    }
                }
                FieldTag::Transform => {
                    self.transform_field(entity, descriptor, &type_name)?;
                }
                FieldTag::None => {}
            }
        }

        Ok(entity)
    }

    fn transform_field(
        &self,
        entity: &mut dyn Entity,
        descriptor: &FieldDescriptor,
        type_name: &str,
    ) -> Result<()> {
        match descriptor.visibility {
            // Public fields are rewritten on every pass, without the
            // marker gate. Asymmetric on purpose; see the gate module.
            Visibility::Public => {
                let current = match entity.read_field(&descriptor.name) {
                    ReadOutcome::Value(value) => value,
                    ReadOutcome::Absent => String::new(),
                    ReadOutcome::Fault => {
                        log::debug!(
                            "read fault on public field '{}.{}', transforming empty value",
                            type_name,
                            descriptor.name
                        );
                        String::new()
                    }
                    ReadOutcome::NotAccessible => {
                        log::warn!(
                            "public field '{}.{}' reported not accessible, skipping",
                            type_name,
                            descriptor.name
                        );
                        return Ok(());
                    }
                };

                let transformed = self.apply(&current, descriptor, type_name)?;
                if entity.write_field(&descriptor.name, transformed) == WriteOutcome::NotAccessible
                {
                    log::warn!(
                        "write to public field '{}.{}' rejected, value unchanged",
                        type_name,
                        descriptor.name
                    );
                }
            }
            Visibility::Restricted => {
                let current = match entity.read_field(&descriptor.name) {
                    ReadOutcome::Value(value) => value,
                    ReadOutcome::Absent => return Ok(()),
                    ReadOutcome::Fault => {
                        log::debug!(
                            "accessor fault on '{}.{}', treating as absent",
                            type_name,
                            descriptor.name
                        );
                        return Ok(());
                    }
                    ReadOutcome::NotAccessible => {
                        log::debug!(
                            "no accessor pair for '{}.{}', skipping",
                            type_name,
                            descriptor.name
                        );
                        return Ok(());
                    }
                };

                if !gate::is_eligible(&current, self.transformer.suffix_marker()) {
                    return Ok(());
                }

                let transformed = self.apply(&current, descriptor, type_name)?;
                if entity.write_field(&descriptor.name, transformed) == WriteOutcome::NotAccessible
                {
                    log::debug!(
                        "mutator missing for '{}.{}', value unchanged",
                        type_name,
                        descriptor.name
                    );
                }
            }
        }

        Ok(())
    }

    fn apply(
        &self,
        current: &str,
        descriptor: &FieldDescriptor,
        type_name: &str,
    ) -> Result<String> {
        self.transformer
            .transform(current)
            .map_err(|source| Error::Transform {
                entity_type: type_name.to_string(),
                field: descriptor.name.clone(),
                source,
            })
    }
}

/// Process one entity graph with the default metadata query and type
/// identity
///
/// Convenience entry point equivalent to
/// `FieldProcessor::new(registry, transformer).process(entity)`.
pub fn process<'e>(
    entity: &'e mut dyn Entity,
    registry: &SchemaRegistry,
    transformer: &dyn Transformer,
) -> Result<&'e mut dyn Entity> {
    FieldProcessor::new(registry, transformer).process(entity)
}
