//! JSON file storage backend.

pub mod connection;
pub mod snapshot_repository;

pub use connection::JsonConnection;
pub use snapshot_repository::JsonSnapshotRepository;
