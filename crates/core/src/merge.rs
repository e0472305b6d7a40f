//! Remote-over-default JSON merge.
//!
//! Every page resolves its content per field: a value supplied by the
//! content API wins, anything it leaves out keeps the bundled default.
//! Objects are merged recursively, so a partial nested object (say a
//! `contact_info` carrying only `phone`) only replaces the fields it has.
//!
//! A remote value counts as missing when it is:
//!
//! - `null`
//! - an empty (or whitespace-only) string
//! - an empty array
//!
//! Arrays are replaced wholesale, never merged element by element.

use serde_json::Value;

/// Merge `remote` over `defaults`, returning the resolved document.
///
/// Neither argument is modified. Keys present only in `remote` are copied
/// through unless they are missing in the sense above.
///
/// When the default at some position is an object and the remote value is
/// a non-object, the default subtree is kept. Scalar type mismatches are
/// left in place for the caller's schema to reject.
///
/// # Examples
///
/// ```
/// use deccan_core::merge::merge_over_defaults;
/// use serde_json::json;
///
/// let defaults = json!({"title": "Default", "note": "Keep me"});
/// let remote = json!({"title": "Custom Title", "note": null});
///
/// assert_eq!(
///     merge_over_defaults(&defaults, &remote),
///     json!({"title": "Custom Title", "note": "Keep me"})
/// );
/// ```
pub fn merge_over_defaults(defaults: &Value, remote: &Value) -> Value {
    match (defaults, remote) {
        (Value::Object(base), Value::Object(patch)) => {
            let mut merged = base.clone();
            for (key, value) in patch {
                match base.get(key) {
                    Some(existing) => {
                        merged.insert(key.clone(), merge_over_defaults(existing, value));
                    }
                    None if is_missing(value) => {}
                    None => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Object(merged)
        }
        (Value::Object(_), _) => defaults.clone(),
        (_, value) if is_missing(value) => defaults.clone(),
        (_, value) => value.clone(),
    }
}

/// Whether a remote value should be treated as absent.
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn defaults() -> Value {
        json!({
            "title": "Microwave Oven Repair Service",
            "gallery_images": ["a.jpg", "b.jpg"],
            "contact_info": {
                "phone": "+91 9766242424",
                "email": "info@example.com"
            },
            "uploaded_video_path": null
        })
    }

    #[test]
    fn empty_remote_keeps_defaults() {
        assert_eq!(merge_over_defaults(&defaults(), &json!({})), defaults());
    }

    #[test]
    fn present_field_overrides_default() {
        let merged = merge_over_defaults(&defaults(), &json!({"title": "Custom Title"}));
        assert_eq!(merged["title"], "Custom Title");
        assert_eq!(merged["gallery_images"], json!(["a.jpg", "b.jpg"]));
        assert_eq!(merged["contact_info"]["phone"], "+91 9766242424");
    }

    #[test]
    fn nested_object_merges_per_subfield() {
        let merged = merge_over_defaults(
            &defaults(),
            &json!({"contact_info": {"phone": "+91 1111111111"}}),
        );
        assert_eq!(merged["contact_info"]["phone"], "+91 1111111111");
        assert_eq!(merged["contact_info"]["email"], "info@example.com");
    }

    #[test]
    fn null_and_blank_values_fall_back() {
        let merged = merge_over_defaults(
            &defaults(),
            &json!({"title": "   ", "gallery_images": [], "contact_info": null}),
        );
        assert_eq!(merged, defaults());
    }

    #[test]
    fn arrays_replace_wholesale() {
        let merged = merge_over_defaults(&defaults(), &json!({"gallery_images": ["z.jpg"]}));
        assert_eq!(merged["gallery_images"], json!(["z.jpg"]));
    }

    #[test]
    fn optional_default_takes_remote_value() {
        let merged = merge_over_defaults(&defaults(), &json!({"uploaded_video_path": "v.mp4"}));
        assert_eq!(merged["uploaded_video_path"], "v.mp4");
    }

    #[test]
    fn unknown_remote_keys_are_copied_unless_missing() {
        let merged = merge_over_defaults(&defaults(), &json!({"extra": 1, "empty": ""}));
        assert_eq!(merged["extra"], 1);
        assert!(merged.get("empty").is_none());
    }

    #[test]
    fn scalar_over_object_keeps_default_subtree() {
        let merged = merge_over_defaults(&defaults(), &json!({"contact_info": "call us"}));
        assert_eq!(merged["contact_info"], defaults()["contact_info"]);
    }

    #[test]
    fn string_replaces_array_default() {
        // Shape coercion happens later, at typed deserialization.
        let base = json!({"description": ["A", "B"]});
        let merged = merge_over_defaults(&base, &json!({"description": "X"}));
        assert_eq!(merged["description"], "X");
    }

    #[test]
    fn booleans_and_zero_are_not_missing() {
        assert!(!is_missing(&json!(false)));
        assert!(!is_missing(&json!(0)));
        assert!(is_missing(&json!(null)));
    }
}
