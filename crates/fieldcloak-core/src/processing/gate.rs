//! Idempotency gate for accessor-backed transform-tagged fields
//!
//! Copyright (c) 2025 Fieldcloak Team
//! Licensed under the Apache-2.0 license

/// Whether a value already ends with the transform marker
///
/// An empty marker cannot witness a prior transform, so it never
/// matches.
pub fn already_transformed(value: &str, marker: &str) -> bool {
    !marker.is_empty() && value.as_bytes().ends_with(marker.as_bytes())
}

/// Whether a field's current value is eligible for transformation
///
/// Eligible iff the value is non-empty and its trailing bytes do not
/// equal the marker suffix. Applied to restricted, accessor-backed
/// fields only; public fields are deliberately not gated.
pub fn is_eligible(current: &str, marker: &str) -> bool {
    !current.is_empty() && !already_transformed(current, marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "::ENC";

    #[test]
    fn test_plain_value_is_eligible() {
        assert!(is_eligible("123-45-6789", MARKER));
    }

    #[test]
    fn test_transformed_value_is_not_eligible() {
        assert!(!is_eligible("123-45-6789::ENC", MARKER));
    }

    #[test]
    fn test_empty_value_is_not_eligible() {
        assert!(!is_eligible("", MARKER));
    }

    #[test]
    fn test_value_shorter_than_marker_is_eligible() {
        assert!(is_eligible(":E", MARKER));
    }

    #[test]
    fn test_marker_in_the_middle_does_not_block() {
        assert!(is_eligible("a::ENCb", MARKER));
    }

    #[test]
    fn test_value_equal_to_marker_is_not_eligible() {
        assert!(!is_eligible("::ENC", MARKER));
    }

    #[test]
    fn test_empty_marker_never_witnesses_a_transform() {
        assert!(is_eligible("anything", ""));
        assert!(!already_transformed("anything", ""));
    }
}
