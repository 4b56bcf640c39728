//! Persistence collaborators.
//!
//! The service only talks to the three traits below. [`WrappedStore`]
//! implements the record and aggregate stores on fjall; [`DirBlobStore`]
//! keeps raw uploads on disk so the corpus can be rebuilt.

#[cfg(feature = "store")]
mod backup;
#[cfg(feature = "store")]
mod db;
mod error;

#[cfg(feature = "store")]
pub use backup::DirBlobStore;
#[cfg(feature = "store")]
pub use db::WrappedStore;
pub use error::StoreError;

use crate::save::SaveRecord;
use crate::stats::WrappedStats;

/// Decoded records keyed by content hash.
pub trait RecordStore: Send + Sync {
    /// Store `record` unless one with the same hash exists. Returns whether it was stored.
    fn insert_if_absent(&self, record: &SaveRecord) -> Result<bool, StoreError>;

    fn find_by_hash(&self, hash: &str) -> Result<Option<SaveRecord>, StoreError>;

    fn list_all(&self) -> Result<Vec<SaveRecord>, StoreError>;

    fn delete_all(&self) -> Result<(), StoreError>;
}

/// Holds at most one aggregate snapshot.
pub trait AggregateStore: Send + Sync {
    /// Replace whatever snapshot is stored with `stats`.
    fn replace_singleton(&self, stats: &WrappedStats) -> Result<(), StoreError>;

    fn read_singleton(&self) -> Result<Option<WrappedStats>, StoreError>;
}

/// Raw upload backup.
pub trait BlobStore: Send + Sync {
    fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Keys starting with `prefix`, sorted.
    fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;
}
