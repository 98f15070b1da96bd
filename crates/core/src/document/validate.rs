//! Patch validation for merge-updates.
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} patch must be a JSON object")]
    NotAnObject(&'static str),
    #[error("social link `{0}` must be a string")]
    NonStringSocial(String),
    #[error("invalid {kind} patch: {reason}")]
    FieldType { kind: &'static str, reason: String },
}

/// Borrow the patch as an object, or reject it.
pub fn patch_object<'a>(
    target: &'static str,
    patch: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    patch
        .as_object()
        .ok_or(ValidationError::NotAnObject(target))
}

/// Social links are URLs; every value in a socials patch must be a string.
pub fn validate_socials_patch(patch: &Map<String, Value>) -> Result<(), ValidationError> {
    match patch.iter().find(|(_, v)| !v.is_string()) {
        Some((key, _)) => Err(ValidationError::NonStringSocial(key.clone())),
        None => Ok(()),
    }
}
