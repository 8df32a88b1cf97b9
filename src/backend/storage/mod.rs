//! Storage layer: abstraction traits and the JSON backend.

pub mod json;
pub mod traits;

pub use json::{JsonConnection, JsonSnapshotRepository};
pub use traits::{Connection, SnapshotStorage};
