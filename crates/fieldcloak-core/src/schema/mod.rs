//! Schema registry and inheritance-aware field resolution
//!
//! Entity types are described declaratively through [`TypeDef`]
//! registrations rather than runtime introspection. The registry
//! flattens a type's ancestor chain on demand into a
//! [`FlattenedSchema`] and caches the result, since type shape is
//! static for the life of the process.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

pub mod loader;

use crate::error::{Error, Result};
use crate::types::{FieldDescriptor, FlattenedSchema, TypeDef};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Side-table of entity type definitions with cached flattening
///
/// The registry may be shared across threads: the flattening cache is
/// read-mostly, and a racing first resolve recomputes the same pure
/// function of the type, so a last-writer-wins insert is safe.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    types: RwLock<HashMap<String, TypeDef>>,
    cache: RwLock<HashMap<String, Arc<FlattenedSchema>>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one type definition
    ///
    /// A definition declaring the same field name twice is rejected.
    /// Re-registering a type name replaces the previous definition and
    /// invalidates cached flattenings.
    pub fn register_type(&self, def: TypeDef) -> Result<()> {
        let mut seen = HashSet::with_capacity(def.fields.len());
        for field in &def.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::SchemaDefinition {
                    message: format!(
                        "Type '{}' declares field '{}' more than once",
                        def.name, field.name
                    ),
                });
            }
        }

        let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
        types.insert(def.name.clone(), def);
        drop(types);

        // Cached flattenings may embed the replaced definition or one
        // of its descendants; drop them all rather than tracking the
        // hierarchy edges.
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.clear();
        Ok(())
    }

    /// Whether a definition is registered under this name
    pub fn contains(&self, type_name: &str) -> bool {
        let types = self.types.read().unwrap_or_else(|e| e.into_inner());
        types.contains_key(type_name)
    }

    /// Resolve a type name to its flattened, inheritance-resolved schema
    ///
    /// Ancestor-declared fields come first; a field re-declared in a
    /// subtype replaces the ancestor's descriptor in place. An
    /// unregistered type anywhere in the ancestor chain is fatal.
    ///
    /// Parent chains are assumed finite and acyclic; a definition cycle
    /// is a caller bug and is not detected.
    pub fn resolve(&self, type_name: &str) -> Result<Arc<FlattenedSchema>> {
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(type_name) {
                return Ok(hit.clone());
            }
        }

        let schema = Arc::new(self.flatten(type_name)?);

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        let entry = cache
            .entry(type_name.to_string())
            .or_insert_with(|| schema.clone());
        Ok(entry.clone())
    }

    fn flatten(&self, type_name: &str) -> Result<FlattenedSchema> {
        let def = {
            let types = self.types.read().unwrap_or_else(|e| e.into_inner());
            types.get(type_name).cloned()
        }
        .ok_or_else(|| Error::UnresolvableType {
            type_name: type_name.to_string(),
        })?;

        let mut schema = match &def.parent {
            Some(parent) => self.resolve(parent)?.as_ref().clone(),
            None => FlattenedSchema::default(),
        };

        for field in def.fields {
            schema.overlay(FieldDescriptor {
                name: field.name,
                declared_type: field.declared_type,
                visibility: field.visibility,
                tag: field.tag,
                owner: def.name.clone(),
            });
        }

        Ok(schema)
    }
}
