//! External transform boundary
//!
//! The concrete transformation algorithm (cipher, key management) is a
//! caller-supplied dependency consumed through this narrow trait. The
//! engine never interprets transformed content; it only uses the
//! marker suffix as an idempotency witness.
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

/// Caller-supplied field transform
///
/// A correct implementation always appends [`suffix_marker`] to its
/// output, and the marker never occurs as a false positive at the end
/// of legitimate untransformed input.
///
/// [`suffix_marker`]: Transformer::suffix_marker
pub trait Transformer {
    /// Transform one field value
    ///
    /// A failure here is fatal for the current traversal and is
    /// propagated to the caller; the engine does not retry or roll
    /// back sibling fields already written.
    fn transform(&self, value: &str) -> anyhow::Result<String>;

    /// The fixed suffix a successful transform appends to its output
    fn suffix_marker(&self) -> &str;
}
