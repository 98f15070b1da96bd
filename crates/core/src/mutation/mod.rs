pub mod patch;

pub use patch::{merge_map, merge_record};
