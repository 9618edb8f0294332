//! Core types and data structures for the Fieldcloak engine
//!
//! This module defines the fundamental data structures used throughout
//! the library for describing entity types, their fields, and the
//! outcomes of the uniform field access protocol.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tag carried by a field in the metadata side-table
///
/// Exactly one tag applies per field: a field is either rewritten in
/// place by the transform function, recursed into as an embedded
/// sub-object, or left alone. The sum type makes `Transform` and
/// `Nested` mutually exclusive per declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTag {
    /// Field content is rewritten by the external transform function
    Transform,
    /// Field holds an embedded sub-object to recurse into
    Nested,
    /// Field is not subject to any processing
    #[default]
    None,
}

/// Visibility of a declared field
///
/// `Public` fields are read and written directly; `Restricted` fields
/// are reachable only through a conventional accessor/mutator pair and
/// pass through the idempotency gate before transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Restricted,
}

/// Registration-time description of one declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within its declaring type
    pub name: String,

    /// Informational declared type (e.g. "string")
    #[serde(default = "default_declared_type")]
    pub declared_type: String,

    /// Field visibility; defaults to restricted
    #[serde(default)]
    pub visibility: Visibility,

    /// Processing tag; defaults to none
    #[serde(default)]
    pub tag: FieldTag,
}

fn default_declared_type() -> String {
    "string".to_string()
}

/// Registration-time description of one entity type
///
/// Type definitions form the declarative side-table the engine works
/// from instead of runtime introspection. A definition may name a
/// parent type; the resolver flattens the ancestor chain on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name, unique within a registry
    pub name: String,

    /// Parent type name, if this type extends another
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Fields declared directly on this type, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Resolved, immutable descriptor for one field of one type
///
/// Produced only by the schema resolver. Describes a type, not a
/// value; `owner` names the most-derived type that declared the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub visibility: Visibility,
    pub tag: FieldTag,
    pub owner: String,
}

/// Ordered, name-unique set of field descriptors for a concrete type
///
/// Ancestor-declared fields come first; a field re-declared in a
/// subtype replaces the ancestor's descriptor in place, keeping the
/// ancestor's position but taking the most-derived declaration's
/// content.
#[derive(Debug, Clone, Default)]
pub struct FlattenedSchema {
    fields: Vec<FieldDescriptor>,
    index: HashMap<String, usize>,
}

impl FlattenedSchema {
    /// Overlay one descriptor: replace a same-named entry in place, or
    /// append at the end
    pub(crate) fn overlay(&mut self, descriptor: FieldDescriptor) {
        match self.index.get(&descriptor.name) {
            Some(&position) => self.fields[position] = descriptor,
            None => {
                self.index.insert(descriptor.name.clone(), self.fields.len());
                self.fields.push(descriptor);
            }
        }
    }

    /// Look up a descriptor by field name
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index.get(name).map(|&position| &self.fields[position])
    }

    /// Iterate descriptors in schema order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Number of fields in the flattened view
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of reading one field through the uniform access protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The field holds this value
    Value(String),
    /// The field is reachable but holds no value
    Absent,
    /// The field cannot be read for processing purposes; for
    /// restricted fields this covers an incomplete accessor pair
    NotAccessible,
    /// The accessor itself failed; treated as an absent value
    Fault,
}

/// Outcome of writing one field through the uniform access protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    NotAccessible,
}
