//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::backend::domain::models::journal::Journal;

/// Trait defining the interface for snapshot storage operations
///
/// The journal persists as a single full snapshot: every save replaces the
/// whole state, every load reads the whole state. Partial updates do not
/// exist at this layer.
pub trait SnapshotStorage: Send + Sync {
    /// Load the persisted journal.
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet, or when the
    /// snapshot exists but cannot be parsed (the caller starts fresh; the
    /// broken file stays untouched until the next save).
    fn load_snapshot(&self) -> Result<Option<Journal>>;

    /// Replace the persisted snapshot with the given journal.
    fn save_snapshot(&self, journal: &Journal) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This abstracts away the specific connection type and provides factory
/// methods for creating repositories, so the domain layer can work with any
/// storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of SnapshotStorage this connection creates
    type SnapshotRepository: SnapshotStorage;

    /// Create a new snapshot repository for this connection
    fn create_snapshot_repository(&self) -> Self::SnapshotRepository;
}
