//! Defensive JSON accessors shared by every deserializer
//!
//! The remote API is inconsistent about absent vs `null` fields, about
//! numbers serialized as strings (64-bit ids in particular), and about
//! timestamp encodings. These helpers centralize the tolerance rules so
//! the deserializers stay declarative.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use super::FrameError;
use crate::types::Image;

/// The remote's "unknown" marker, normalized to the Undefined sentinel.
const UNKNOWN_MARKER: &str = "#";

pub(crate) type Object = Map<String, Value>;

/// Interpret a value as a JSON object.
pub(crate) fn as_object<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Object, FrameError> {
    value.as_object().ok_or(FrameError::Shape { context, expected: "an object" })
}

/// Interpret a value as a JSON array.
pub(crate) fn as_array<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a [Value], FrameError> {
    value.as_array().map(Vec::as_slice).ok_or(FrameError::Shape { context, expected: "an array" })
}

/// A required field: absent and `null` are both errors.
pub(crate) fn field<'a>(
    obj: &'a Object,
    context: &'static str,
    field: &'static str,
) -> Result<&'a Value, FrameError> {
    match obj.get(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(FrameError::Missing { context, field }),
    }
}

/// An optional field: absent and `null` are both the absent state.
pub(crate) fn opt_field<'a>(obj: &'a Object, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|value| !value.is_null())
}

/// A required sub-object.
pub(crate) fn object_field<'a>(
    obj: &'a Object,
    context: &'static str,
    name: &'static str,
) -> Result<&'a Object, FrameError> {
    field(obj, context, name)?
        .as_object()
        .ok_or(FrameError::Invalid { context, field: name, expected: "an object" })
}

/// An optional sub-object.
pub(crate) fn opt_object_field<'a>(obj: &'a Object, name: &str) -> Option<&'a Object> {
    opt_field(obj, name).and_then(Value::as_object)
}

/// An array field; absent means empty.
pub(crate) fn array_or_empty<'a>(obj: &'a Object, name: &str) -> &'a [Value] {
    opt_field(obj, name).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// A required 64-bit id. The remote serializes these as decimal strings;
/// plain numbers are accepted too.
pub(crate) fn id(obj: &Object, context: &'static str, name: &'static str) -> Result<i64, FrameError> {
    value_as_i64(field(obj, context, name)?)
        .ok_or(FrameError::Invalid { context, field: name, expected: "a 64-bit integer" })
}

/// An optional 64-bit id.
pub(crate) fn opt_id(obj: &Object, name: &str) -> Option<i64> {
    opt_field(obj, name).and_then(value_as_i64)
}

/// A required integer field.
pub(crate) fn int(obj: &Object, context: &'static str, name: &'static str) -> Result<i64, FrameError> {
    id(obj, context, name)
}

/// An integer field with a default.
pub(crate) fn int_or(obj: &Object, name: &str, default: i64) -> i64 {
    opt_id(obj, name).unwrap_or(default)
}

/// An optional integer field.
pub(crate) fn opt_int(obj: &Object, name: &str) -> Option<i64> {
    opt_id(obj, name)
}

/// A required definition hash.
pub(crate) fn hash(obj: &Object, context: &'static str, name: &'static str) -> Result<u32, FrameError> {
    let raw = field(obj, context, name)?
        .as_u64()
        .ok_or(FrameError::Invalid { context, field: name, expected: "an unsigned integer" })?;
    Ok(raw as u32)
}

/// An optional definition hash.
pub(crate) fn opt_hash(obj: &Object, name: &str) -> Option<u32> {
    opt_field(obj, name).and_then(Value::as_u64).map(|raw| raw as u32)
}

/// A float field with a default.
pub(crate) fn float_or(obj: &Object, name: &str, default: f64) -> f64 {
    opt_field(obj, name).and_then(Value::as_f64).unwrap_or(default)
}

/// A boolean field; absent means `false`.
pub(crate) fn boolean(obj: &Object, name: &str) -> bool {
    opt_field(obj, name).and_then(Value::as_bool).unwrap_or(false)
}

/// A required string field.
pub(crate) fn string(
    obj: &Object,
    context: &'static str,
    name: &'static str,
) -> Result<String, FrameError> {
    field(obj, context, name)?
        .as_str()
        .map(str::to_owned)
        .ok_or(FrameError::Invalid { context, field: name, expected: "a string" })
}

/// A display string: absent, `null` and the remote's unknown marker all
/// normalize to the Undefined sentinel.
pub(crate) fn display_string(obj: &Object, name: &str) -> String {
    match opt_field(obj, name).and_then(Value::as_str) {
        Some(UNKNOWN_MARKER) | None => crate::UNDEFINED.to_owned(),
        Some(text) => text.to_owned(),
    }
}

/// An optional string: absent, `null` and the unknown marker are absent.
pub(crate) fn opt_string(obj: &Object, name: &str) -> Option<String> {
    match opt_field(obj, name).and_then(Value::as_str) {
        Some(UNKNOWN_MARKER) | None => None,
        Some(text) => Some(text.to_owned()),
    }
}

/// The short numeric discriminator paired with global display names.
pub(crate) fn short_code(obj: &Object, name: &str) -> Option<i16> {
    opt_int(obj, name).and_then(|code| i16::try_from(code).ok())
}

fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|parsed| parsed.with_timezone(&Utc))
}

/// A required ISO-8601 timestamp.
pub(crate) fn timestamp(
    obj: &Object,
    context: &'static str,
    name: &'static str,
) -> Result<DateTime<Utc>, FrameError> {
    let raw = string(obj, context, name)?;
    parse_iso(&raw).ok_or(FrameError::Timestamp { field: name, value: raw })
}

/// An optional ISO-8601 timestamp; unparseable values degrade to absent.
pub(crate) fn opt_timestamp(obj: &Object, name: &str) -> Option<DateTime<Utc>> {
    opt_field(obj, name).and_then(Value::as_str).and_then(parse_iso)
}

/// An optional timestamp encoded as integer seconds since the epoch
/// (possibly as a decimal string).
pub(crate) fn opt_epoch(obj: &Object, name: &str) -> Option<DateTime<Utc>> {
    opt_id(obj, name).and_then(|secs| Utc.timestamp_opt(secs, 0).single())
}

/// An icon field; the missing-icon path is substituted when absent.
pub(crate) fn image_or_missing(obj: &Object, name: &str) -> Image {
    match opt_field(obj, name).and_then(Value::as_str) {
        Some(path) if !path.is_empty() => Image(path.to_owned()),
        _ => Image::missing_icon(),
    }
}

/// Read the scalar under `values.<name>.basic.value` in a stats block.
pub(crate) fn stat_value(values: &Object, name: &str) -> f64 {
    opt_object_field(values, name)
        .and_then(|stat| opt_object_field(stat, "basic"))
        .and_then(|basic| basic.get("value"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Collect the integers of an array field; absent means empty.
pub(crate) fn int_array(obj: &Object, name: &str) -> Vec<i64> {
    array_or_empty(obj, name).iter().filter_map(value_as_i64).collect()
}

/// Collect the u32 hashes of an array field; absent means empty.
pub(crate) fn hash_array(obj: &Object, name: &str) -> Vec<u32> {
    array_or_empty(obj, name).iter().filter_map(Value::as_u64).map(|raw| raw as u32).collect()
}

#[cfg(test)]
mod tests {
    //! Unit tests for the defensive accessors.
    use serde_json::json;

    use super::*;

    /// Validates `id` behavior for the string-encoded identifier scenario.
    ///
    /// Assertions:
    /// - Confirms decimal strings and plain numbers both parse.
    /// - Ensures a non-numeric string is rejected.
    #[test]
    fn test_id_accepts_string_and_number() {
        let value = json!({ "a": "20315338", "b": 42, "c": "abc" });
        let obj = value.as_object().unwrap();

        assert_eq!(id(obj, "test", "a").unwrap(), 20_315_338);
        assert_eq!(id(obj, "test", "b").unwrap(), 42);
        assert!(id(obj, "test", "c").is_err());
    }

    /// Validates `display_string` behavior for the unknown marker
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the `"#"` marker normalizes to the empty sentinel.
    /// - Confirms absent and `null` normalize the same way.
    /// - Confirms a real string passes through.
    #[test]
    fn test_display_string_normalization() {
        let value = json!({ "marker": "#", "nil": null, "name": "Crimson" });
        let obj = value.as_object().unwrap();

        assert_eq!(display_string(obj, "marker"), "");
        assert_eq!(display_string(obj, "nil"), "");
        assert_eq!(display_string(obj, "absent"), "");
        assert_eq!(display_string(obj, "name"), "Crimson");
    }

    /// Validates timestamp parsing for both remote encodings.
    ///
    /// Assertions:
    /// - Confirms an ISO-8601 string with zone parses.
    /// - Confirms epoch seconds (as a string) parse.
    /// - Ensures garbage degrades to absent for optional fields.
    #[test]
    fn test_timestamp_variants() {
        let value = json!({
            "iso": "2017-09-06T17:00:00Z",
            "epoch": "1504718400",
            "junk": "not-a-date",
        });
        let obj = value.as_object().unwrap();

        assert_eq!(timestamp(obj, "test", "iso").unwrap().timestamp(), 1_504_717_200);
        assert_eq!(opt_epoch(obj, "epoch").unwrap().timestamp(), 1_504_718_400);
        assert!(opt_timestamp(obj, "junk").is_none());
        assert!(timestamp(obj, "test", "junk").is_err());
    }

    /// Validates `image_or_missing` behavior for the substitution
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms a present path is kept.
    /// - Confirms absent and empty paths get the missing-icon default.
    #[test]
    fn test_image_substitution() {
        let value = json!({ "icon": "/img/theme/profile.jpg", "empty": "" });
        let obj = value.as_object().unwrap();

        assert_eq!(image_or_missing(obj, "icon").0, "/img/theme/profile.jpg");
        assert_eq!(image_or_missing(obj, "empty"), Image::missing_icon());
        assert_eq!(image_or_missing(obj, "absent"), Image::missing_icon());
    }

    /// Validates `stat_value` behavior for the nested stats block.
    ///
    /// Assertions:
    /// - Confirms the `basic.value` scalar is extracted.
    /// - Confirms a missing stat reads as zero.
    #[test]
    fn test_stat_value_extraction() {
        let value = json!({
            "kills": { "basic": { "value": 12.0, "displayValue": "12" } }
        });
        let obj = value.as_object().unwrap();

        assert_eq!(stat_value(obj, "kills"), 12.0);
        assert_eq!(stat_value(obj, "deaths"), 0.0);
    }
}
