use serde_json::{Map, Value};

use super::model::SiteDocument;

/// A named top-level field of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Site,
    Socials,
    Events,
    Mixes,
    Services,
}

/// The mapping-valued collections that support merge-updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCollection {
    Site,
    Socials,
}

impl MapCollection {
    pub fn name(self) -> &'static str {
        match self {
            MapCollection::Site => "site",
            MapCollection::Socials => "socials",
        }
    }
}

impl SiteDocument {
    /// Current value of a collection as JSON, verbatim.
    pub fn collection_value(&self, collection: Collection) -> Value {
        match collection {
            Collection::Site => Value::Object(self.site.clone()),
            Collection::Socials => Value::Object(self.socials.clone()),
            Collection::Events => Value::Array(self.events.clone()),
            Collection::Mixes => Value::Array(self.mixes.clone()),
            Collection::Services => Value::Array(self.services.clone()),
        }
    }

    pub fn map_mut(&mut self, collection: MapCollection) -> &mut Map<String, Value> {
        match collection {
            MapCollection::Site => &mut self.site,
            MapCollection::Socials => &mut self.socials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_value_is_verbatim() {
        let doc: SiteDocument = serde_json::from_value(json!({
            "site": {"name": "DJ Mario"},
            "events": [{"id": 1, "isPrivate": "yes"}],
            "services": [{"id": 1, "title": "Clubs"}]
        }))
        .unwrap();

        assert_eq!(doc.collection_value(Collection::Site), json!({"name": "DJ Mario"}));
        assert_eq!(
            doc.collection_value(Collection::Events),
            json!([{"id": 1, "isPrivate": "yes"}])
        );
        assert_eq!(
            doc.collection_value(Collection::Services),
            json!([{"id": 1, "title": "Clubs"}])
        );
        assert_eq!(doc.collection_value(Collection::Mixes), json!([]));
        assert_eq!(doc.collection_value(Collection::Socials), json!({}));
    }
}
