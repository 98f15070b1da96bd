use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root JSON document persisted by the data store.
///
/// Records are kept as raw JSON so that a record holding a loosely typed
/// value (`"isPrivate": "yes"`, `"tags": null`, a string id) never stops the
/// document from loading. Typed views are only applied when creating a
/// record or checking a patch. Top-level keys the model does not name are
/// kept in `extra`, so a load/save cycle is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDocument {
    /// Free-form site metadata (name, tagline, contact, ...).
    #[serde(default)]
    pub site: Map<String, Value>,
    /// Social network name to profile URL.
    #[serde(default)]
    pub socials: Map<String, Value>,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default)]
    pub mixes: Vec<Value>,
    #[serde(default)]
    pub services: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteDocument {
    /// Largest integer id present in any store-created collection.
    pub fn max_created_id(&self) -> Option<i64> {
        self.events
            .iter()
            .chain(&self.mixes)
            .filter_map(record_id)
            .max()
    }
}

/// Integer `id` of a stored record. Records without one, or with an id of
/// another JSON type, are never matched by id.
pub fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// A gig listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rsvp_link: String,
    #[serde(default)]
    pub is_private: bool,
}

/// A recorded mix with an embeddable player URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mix {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub embed_url: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// A bookable service. Only `id` is fixed; everything else is free-form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The typed shape of one of the document's ordered collections.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable name used in error messages ("Event not found").
    const KIND: &'static str;

    fn list_mut(doc: &mut SiteDocument) -> &mut Vec<Value>;
}

/// Records whose lifecycle the store owns: they are created with a fresh id
/// and may be deleted. Services are neither.
pub trait Creatable: Record {
    fn from_attributes(id: i64, attrs: &super::attributes::Attributes<'_>) -> Self;
}

impl Record for Event {
    const KIND: &'static str = "Event";

    fn list_mut(doc: &mut SiteDocument) -> &mut Vec<Value> {
        &mut doc.events
    }
}

impl Record for Mix {
    const KIND: &'static str = "Mix";

    fn list_mut(doc: &mut SiteDocument) -> &mut Vec<Value> {
        &mut doc.mixes
    }
}

impl Record for Service {
    const KIND: &'static str = "Service";

    fn list_mut(doc: &mut SiteDocument) -> &mut Vec<Value> {
        &mut doc.services
    }
}

impl Creatable for Event {
    fn from_attributes(id: i64, attrs: &super::attributes::Attributes<'_>) -> Self {
        Self {
            id,
            date: attrs.string("date"),
            venue: attrs.string("venue"),
            city: attrs.string("city"),
            tags: attrs.tags("tags"),
            rsvp_link: attrs.string("rsvpLink"),
            is_private: attrs.flag("isPrivate"),
        }
    }
}

impl Creatable for Mix {
    fn from_attributes(id: i64, attrs: &super::attributes::Attributes<'_>) -> Self {
        Self {
            id,
            title: attrs.string("title"),
            tags: attrs.tags("tags"),
            duration: attrs.string("duration"),
            embed_url: attrs.string("embedUrl"),
            is_featured: attrs.flag("isFeatured"),
        }
    }
}
