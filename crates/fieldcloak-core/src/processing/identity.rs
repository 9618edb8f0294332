//! Type-identity normalization for proxied or wrapped instances
//!
//! Persistence frameworks commonly hand out lazy-loading proxies whose
//! synthetic type name would resolve to an empty, useless schema. The
//! host supplies this narrow adapter to unwrap such names to the true
//! declared type; the engine itself never assumes proxying exists.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

use super::access::Entity;

/// Adapter answering the true declared type of a possibly-proxied
/// instance
pub trait TypeIdentity {
    fn real_type_of(&self, entity: &dyn Entity) -> String;
}

/// Default identity: trust the instance's own declared type
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredType;

impl TypeIdentity for DeclaredType {
    fn real_type_of(&self, entity: &dyn Entity) -> String {
        entity.declared_type().to_string()
    }
}
