//! Shallow merge-patch semantics.
//!
//! A patch overwrites the keys it names and leaves every other key intact.
//! Nested objects are replaced whole, not merged recursively.
use serde_json::{Map, Value};

use crate::document::{validate::ValidationError, Record};

/// Key that a patch may never change on a record.
const IMMUTABLE_KEY: &str = "id";

/// Overwrite `target` with every key of `patch`.
pub fn merge_map(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        target.insert(key.clone(), value.clone());
    }
}

/// Check the keys a patch sets against the typed shape of `T`.
///
/// Only the patched keys are checked; values already stored on the record
/// are not, so a loosely typed record stays patchable.
pub fn check_patch<T: Record>(patch: &Map<String, Value>) -> Result<(), ValidationError> {
    let mut candidate: Map<String, Value> = patch
        .iter()
        .filter(|(k, _)| k.as_str() != IMMUTABLE_KEY)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    candidate.insert(IMMUTABLE_KEY.to_string(), Value::from(0));

    serde_json::from_value::<T>(Value::Object(candidate))
        .map(|_| ())
        .map_err(|e| ValidationError::FieldType {
            kind: T::KIND,
            reason: e.to_string(),
        })
}

/// Apply `patch` to a stored record of kind `T`.
///
/// `id` in the patch is ignored. A patched value that does not fit the
/// record's typed field (e.g. a string for a boolean flag) rejects the whole
/// patch and leaves the record untouched. Keys the typed shape does not name
/// are merged as-is.
pub fn merge_record<T: Record>(
    record: &mut Map<String, Value>,
    patch: &Map<String, Value>,
) -> Result<(), ValidationError> {
    check_patch::<T>(patch)?;
    for (key, value) in patch.iter().filter(|(k, _)| k.as_str() != IMMUTABLE_KEY) {
        record.insert(key.clone(), value.clone());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Event, Service};
    use serde_json::json;

    fn event() -> Map<String, Value> {
        json!({
            "id": 7, "date": "2024-05-01", "venue": "Loft", "city": "NYC",
            "tags": ["house"], "rsvpLink": "", "isPrivate": false
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn merge_map_overwrites_and_keeps() {
        let mut site = json!({"name": "DJ Mario", "tagline": "old"});
        let patch = json!({"tagline": "new", "email": "book@djmario.com"});
        merge_map(
            site.as_object_mut().unwrap(),
            patch.as_object().unwrap(),
        );
        assert_eq!(
            site,
            json!({"name": "DJ Mario", "tagline": "new", "email": "book@djmario.com"})
        );
    }

    #[test]
    fn merge_record_overwrites_named_fields_only() {
        let mut record = event();
        let patch = json!({"isPrivate": true});
        merge_record::<Event>(&mut record, patch.as_object().unwrap()).unwrap();
        assert_eq!(record["isPrivate"], json!(true));
        assert_eq!(record["venue"], json!("Loft"));
        assert_eq!(record["tags"], json!(["house"]));
        assert_eq!(record["id"], json!(7));
    }

    #[test]
    fn merge_record_ignores_id() {
        let mut record = event();
        let patch = json!({"id": 99, "city": "LA"});
        merge_record::<Event>(&mut record, patch.as_object().unwrap()).unwrap();
        assert_eq!(record["id"], json!(7));
        assert_eq!(record["city"], json!("LA"));
    }

    #[test]
    fn merge_record_keeps_unknown_keys() {
        let mut record = event();
        let patch = json!({"flyer": "poster.png"});
        merge_record::<Event>(&mut record, patch.as_object().unwrap()).unwrap();
        assert_eq!(record["flyer"], json!("poster.png"));
    }

    #[test]
    fn merge_record_rejects_mistyped_field() {
        let mut record = event();
        let patch = json!({"isPrivate": "yes", "city": "LA"});
        let err = merge_record::<Event>(&mut record, patch.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, ValidationError::FieldType { kind: "Event", .. }));
        assert_eq!(record, event());
    }

    #[test]
    fn loosely_typed_record_stays_patchable() {
        let mut record = json!({"id": 3, "isPrivate": "yes", "tags": null})
            .as_object()
            .cloned()
            .unwrap();
        let patch = json!({"venue": "Basement"});
        merge_record::<Event>(&mut record, patch.as_object().unwrap()).unwrap();
        assert_eq!(record["venue"], json!("Basement"));
        assert_eq!(record["isPrivate"], json!("yes"));
        assert_eq!(record["tags"], Value::Null);
    }

    #[test]
    fn service_fields_are_free_form() {
        let mut record = json!({"id": 2, "title": "Weddings"}).as_object().cloned().unwrap();
        let patch = json!({"title": "Private parties", "price": 500});
        merge_record::<Service>(&mut record, patch.as_object().unwrap()).unwrap();
        assert_eq!(record["title"], json!("Private parties"));
        assert_eq!(record["price"], json!(500));
    }
}
