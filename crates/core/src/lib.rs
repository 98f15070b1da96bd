//! Storage core for the booth site: the JSON document model, merge-patch
//! semantics, id allocation and the file-backed [`DataStore`].

pub mod document;
pub mod mutation;
pub mod store;

pub use document::{Collection, Event, MapCollection, Mix, Service, SiteDocument};
pub use store::{DataStore, StoreError};
