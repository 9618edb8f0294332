//! Persistence lifecycle hooks
//!
//! The host persistence framework is expected to run a processing pass
//! at two points: immediately before an instance is first durably
//! stored, and immediately before a modified instance is stored again.
//! How those points are detected is the host's business; this adapter
//! is the surface its event dispatch plugs into. Both hooks firing in
//! one logical operation is safe: the marker gate blocks the second
//! rewrite of accessor-backed fields.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

use super::access::Entity;
use super::transformer::Transformer;
use super::FieldProcessor;
use crate::error::Result;
use crate::schema::SchemaRegistry;

/// Adapter binding a processor configuration to persistence lifecycle
/// events
pub struct PersistHooks<'a> {
    processor: FieldProcessor<'a>,
}

impl<'a> PersistHooks<'a> {
    /// Hooks over a default processor configuration
    pub fn new(registry: &'a SchemaRegistry, transformer: &'a dyn Transformer) -> Self {
        Self {
            processor: FieldProcessor::new(registry, transformer),
        }
    }

    /// Hooks over a customized processor (metadata query, type
    /// identity)
    pub fn from_processor(processor: FieldProcessor<'a>) -> Self {
        Self { processor }
    }

    /// Run before an instance is first durably stored
    pub fn before_insert<'e>(&self, entity: &'e mut dyn Entity) -> Result<&'e mut dyn Entity> {
        self.processor.process(entity)
    }

    /// Run before an already-stored instance's modified state is
    /// durably stored
    pub fn before_update<'e>(&self, entity: &'e mut dyn Entity) -> Result<&'e mut dyn Entity> {
        self.processor.process(entity)
    }
}
