//! Uniform field access protocol for entity instances
//!
//! The engine has no structural knowledge of an entity beyond this
//! trait: fields are read and written by name, and embedded
//! sub-objects are handed back as further [`Entity`] references.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

use crate::types::{ReadOutcome, WriteOutcome};

/// Capability interface implemented per concrete entity type
///
/// Implementations are expected to be hand-written or generated per
/// type, replacing reflective property access with an explicit
/// protocol.
///
/// # Implementor contract
///
/// - A `Public` field is read and written directly; its read should
///   only ever answer `Value` or `Absent`.
/// - A `Restricted` field is reachable only through its conventional
///   accessor/mutator pair. When either half of the pair is missing,
///   both `read_field` and `write_field` must answer `NotAccessible`
///   so the field is skipped rather than half-processed.
/// - An accessor that fails internally must be reported as
///   [`ReadOutcome::Fault`], never panicked through: one malformed
///   accessor must not abort processing of the remaining fields.
/// - `nested_field_mut` answers `None` uniformly for an absent,
///   inaccessible, or faulting embedded object; all three mean "do
///   not recurse".
pub trait Entity: std::fmt::Debug {
    /// The type name this instance answers to
    ///
    /// A transparent wrapper or lazy-loading proxy may answer with its
    /// own synthetic name; schema resolution goes through a
    /// [`crate::processing::identity::TypeIdentity`] adapter that
    /// normalizes such names to the true declared type.
    fn declared_type(&self) -> &str;

    /// Read the current value of a field by name
    fn read_field(&self, field: &str) -> ReadOutcome;

    /// Write a new value to a field by name
    fn write_field(&mut self, field: &str, value: String) -> WriteOutcome;

    /// Mutable access to an embedded sub-object, if present
    fn nested_field_mut(&mut self, field: &str) -> Option<&mut dyn Entity>;
}
