pub mod model;

pub use model::{listing, load_records, Entry};
