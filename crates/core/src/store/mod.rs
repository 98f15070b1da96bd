//! The file-backed document store and its error type.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::DataStore;
