//! crates/focusdeck_core/src/validate.rs
//!
//! Shared field-validation helpers used by both stores.
//!
//! Validation never raises: every check either accepts the value or records a
//! human-readable message under the field's wire name. All fields are checked
//! in one pass so a caller sees every problem at once, not just the first.

use serde::de::{self, Deserializer, Visitor};
use std::collections::BTreeMap;
use std::fmt;

/// Field-name to message map produced when a draft fails validation.
///
/// Keys are the wire (camelCase) field names so the map can be surfaced to a
/// form or JSON caller verbatim.
pub type ValidationErrors = BTreeMap<String, String>;

/// Trims an optional raw field, treating a missing field as empty.
pub(crate) fn trimmed(raw: Option<&str>) -> &str {
    raw.unwrap_or("").trim()
}

/// Parses a raw field as an integer and checks it against inclusive bounds.
///
/// A missing value, a non-numeric value, and an out-of-range value all record
/// the same message; the surfaced error does not distinguish them.
pub(crate) fn int_in_range(
    errors: &mut ValidationErrors,
    field: &str,
    raw: Option<&str>,
    min: u32,
    max: u32,
    message: &str,
) -> Option<u32> {
    match trimmed(raw).parse::<i64>() {
        Ok(n) if n >= i64::from(min) && n <= i64::from(max) => Some(n as u32),
        _ => {
            errors.insert(field.to_string(), message.to_string());
            None
        }
    }
}

/// Records an error when a trimmed value is empty or longer than `max_chars`.
pub(crate) fn required_with_max(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    max_chars: usize,
    empty_message: &str,
    long_message: &str,
) {
    if value.is_empty() {
        errors.insert(field.to_string(), empty_message.to_string());
    } else if value.chars().count() > max_chars {
        errors.insert(field.to_string(), long_message.to_string());
    }
}

/// Truncates a string to at most `max_chars` characters, silently.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

//=========================================================================================
// Raw Scalar Deserialization
//=========================================================================================

/// Deserializes an optional draft field from any JSON scalar.
///
/// Form bodies always deliver strings, but a JSON caller may send numbers or
/// booleans for the same fields. Every scalar is captured as its textual form
/// so the store boundary sees one untyped representation regardless of
/// transport; parsing happens inside the store.
pub(crate) fn raw_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean, or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(ScalarVisitor)
        }
    }

    deserializer.deserialize_any(ScalarVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_in_range_accepts_inclusive_bounds() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            int_in_range(&mut errors, "focusMinutes", Some("10"), 10, 90, "bad"),
            Some(10)
        );
        assert_eq!(
            int_in_range(&mut errors, "focusMinutes", Some("90"), 10, 90, "bad"),
            Some(90)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn int_in_range_treats_garbage_and_out_of_range_alike() {
        for raw in [Some("abc"), Some("9"), Some("91"), None, Some("")] {
            let mut errors = ValidationErrors::new();
            assert_eq!(
                int_in_range(&mut errors, "focusMinutes", raw, 10, 90, "bad"),
                None
            );
            assert_eq!(errors.get("focusMinutes").map(String::as_str), Some("bad"));
        }
    }

    #[test]
    fn truncate_chars_respects_character_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 40), "short");
    }
}
