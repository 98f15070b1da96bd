use serde_json::{Map, Value};

/// Lenient view over the attributes supplied when creating a record.
///
/// Missing keys, `null`, falsy values and values of the wrong JSON type all
/// fall back to the field's default (empty string, empty list, `false`).
/// A body that is not an object behaves as if it were `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Attributes<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self {
            map: body.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    pub fn string(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// String elements of an array; non-string elements are skipped.
    pub fn tags(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}
