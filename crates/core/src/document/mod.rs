pub mod attributes;
pub mod collection;
pub mod id;
pub mod model;
pub mod validate;

pub use collection::{Collection, MapCollection};
pub use model::{record_id, Creatable, Event, Mix, Record, Service, SiteDocument};
