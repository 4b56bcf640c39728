//! Ingest and refresh orchestration.
//!
//! [`WrappedService`] ties the decoder and the aggregation engine to the
//! persistence collaborators. Every "read all, aggregate, replace snapshot"
//! sequence runs under one lock, so a slower recompute can never overwrite
//! the result of a later one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use thiserror::Error;

use crate::logging::{debug, info, warn};
use crate::save::decode;
use crate::stats::{WrappedStats, aggregate};
use crate::store::{AggregateStore, BlobStore, RecordStore, StoreError};

/// File name prefix for backed-up uploads.
pub const BACKUP_PREFIX: &str = "choku-save-";

/// Backup key for the upload with `hash`.
pub fn backup_key(hash: &str) -> String {
    format!("{}{}.sav", BACKUP_PREFIX, hash)
}

/// Errors surfaced by service operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No backup store is configured")]
    BackupNotConfigured,
}

/// Result of one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Not a finished save; nothing was stored.
    Invalid(String),
    /// Already stored; the snapshot was left alone.
    Duplicate(String),
    /// Stored and the snapshot recomputed.
    Accepted(String),
}

impl IngestOutcome {
    /// Content hash of the upload.
    pub fn hash(&self) -> &str {
        match self {
            IngestOutcome::Invalid(hash)
            | IngestOutcome::Duplicate(hash)
            | IngestOutcome::Accepted(hash) => hash,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IngestOutcome::Invalid(_) => "invalid",
            IngestOutcome::Duplicate(_) => "duplicate",
            IngestOutcome::Accepted(_) => "accepted",
        }
    }
}

/// What a refresh rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    /// Backups decoded and stored.
    pub restored: usize,
    /// Backups that were invalid, unreadable or duplicates.
    pub skipped: usize,
}

/// Decoder, aggregator and stores wired together.
///
/// ```ignore
/// use choku_wrapped::{WrappedService, WrappedStore};
///
/// let service = WrappedService::from_store(WrappedStore::open_or_init(".choku-wrapped")?);
/// let outcome = service.ingest(&std::fs::read("chokuretsu.sav")?)?;
/// println!("{} {}", outcome.label(), outcome.hash());
/// ```
pub struct WrappedService {
    records: Arc<dyn RecordStore>,
    aggregates: Arc<dyn AggregateStore>,
    backup: Option<Arc<dyn BlobStore>>,
    write_lock: Mutex<()>,
}

impl WrappedService {
    pub fn new(records: Arc<dyn RecordStore>, aggregates: Arc<dyn AggregateStore>) -> Self {
        Self {
            records,
            aggregates,
            backup: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Use one fjall store for both records and the snapshot.
    #[cfg(feature = "store")]
    pub fn from_store(store: crate::store::WrappedStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }

    /// Back up every valid upload to `backup`.
    pub fn with_backup(mut self, backup: Arc<dyn BlobStore>) -> Self {
        self.backup = Some(backup);
        self
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded state lives in the stores, so a poisoned lock is still usable.
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decode and store one upload.
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    pub fn ingest(&self, bytes: &[u8]) -> Result<IngestOutcome, ServiceError> {
        let record = decode(bytes);
        let hash = record.sha256_hash.clone();
        if !record.is_valid {
            info!(hash = %hash, "rejected invalid save");
            return Ok(IngestOutcome::Invalid(hash));
        }

        if let Some(backup) = &self.backup {
            backup.put(&backup_key(&hash), bytes)?;
        }

        let _guard = self.lock();
        if !self.records.insert_if_absent(&record)? {
            debug!(hash = %hash, "duplicate save");
            return Ok(IngestOutcome::Duplicate(hash));
        }
        let stats = self.recompute_locked()?;
        info!(hash = %hash, submissions = stats.num_submissions, "save accepted");
        Ok(IngestOutcome::Accepted(hash))
    }

    /// Rebuild the snapshot from every stored record.
    pub fn recompute(&self) -> Result<WrappedStats, ServiceError> {
        let _guard = self.lock();
        self.recompute_locked()
    }

    fn recompute_locked(&self) -> Result<WrappedStats, ServiceError> {
        let records = self.records.list_all()?;
        let stats = aggregate(&records);
        self.aggregates.replace_singleton(&stats)?;
        debug!(records = records.len(), "snapshot recomputed");
        Ok(stats)
    }

    /// The stored snapshot, or the empty one.
    pub fn snapshot(&self) -> Result<WrappedStats, ServiceError> {
        Ok(self.aggregates.read_singleton()?.unwrap_or_default())
    }

    /// The stored snapshot with the record for `hash` attached.
    ///
    /// Hashes match case-insensitively. Returns `None` when no such record exists.
    pub fn snapshot_for(&self, hash: &str) -> Result<Option<WrappedStats>, ServiceError> {
        let Some(record) = self.records.find_by_hash(&hash.to_ascii_uppercase())? else {
            return Ok(None);
        };
        Ok(Some(self.snapshot()?.with_save_data(record)))
    }

    /// Wipe all records and rebuild them from the backups, then recompute once.
    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    pub fn refresh(&self) -> Result<RefreshReport, ServiceError> {
        let backup = self.backup.as_ref().ok_or(ServiceError::BackupNotConfigured)?;

        let _guard = self.lock();
        let keys = backup.list(BACKUP_PREFIX)?;
        self.records.delete_all()?;

        let mut report = RefreshReport::default();
        for key in keys {
            let bytes = match backup.get(&key) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(key = %key, error = %err, "skipping unreadable backup");
                    report.skipped += 1;
                    continue;
                }
            };
            let record = decode(&bytes);
            if record.is_valid && self.records.insert_if_absent(&record)? {
                report.restored += 1;
            } else {
                debug!(key = %key, "skipping backup");
                report.skipped += 1;
            }
        }

        self.recompute_locked()?;
        info!(
            restored = report.restored,
            skipped = report.skipped,
            "records rebuilt from backup"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;
    use crate::save::fixture::{SaveBuilder, SlotBuilder};
    use crate::save::{SaveRecord, content_hash};

    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<BTreeMap<String, SaveRecord>>,
        stats: Mutex<Option<WrappedStats>>,
        replaced: Mutex<usize>,
    }

    impl RecordStore for MemoryStore {
        fn insert_if_absent(&self, record: &SaveRecord) -> Result<bool, StoreError> {
            let mut records = self.records.lock().unwrap();
            if records.contains_key(&record.sha256_hash) {
                return Ok(false);
            }
            records.insert(record.sha256_hash.clone(), record.clone());
            Ok(true)
        }

        fn find_by_hash(&self, hash: &str) -> Result<Option<SaveRecord>, StoreError> {
            Ok(self.records.lock().unwrap().get(hash).cloned())
        }

        fn list_all(&self) -> Result<Vec<SaveRecord>, StoreError> {
            Ok(self.records.lock().unwrap().values().cloned().collect())
        }

        fn delete_all(&self) -> Result<(), StoreError> {
            self.records.lock().unwrap().clear();
            Ok(())
        }
    }

    impl AggregateStore for MemoryStore {
        fn replace_singleton(&self, stats: &WrappedStats) -> Result<(), StoreError> {
            *self.stats.lock().unwrap() = Some(stats.clone());
            *self.replaced.lock().unwrap() += 1;
            Ok(())
        }

        fn read_singleton(&self) -> Result<Option<WrappedStats>, StoreError> {
            Ok(self.stats.lock().unwrap().clone())
        }
    }

    #[derive(Default)]
    struct MemoryBlobs(Mutex<BTreeMap<String, Vec<u8>>>);

    impl BlobStore for MemoryBlobs {
        fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
            self.0.lock().unwrap().insert(key.to_string(), bytes.to_vec());
            Ok(())
        }

        fn list(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect())
        }

        fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
            self.0
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| StoreError::BlobNotFound(key.to_string()))
        }
    }

    fn save_blob(second: u8) -> Vec<u8> {
        SaveBuilder::new()
            .checkpoint(0, SlotBuilder::completed().saved_at(2024, 6, 1, 12, 0, second))
            .build()
    }

    fn service() -> (WrappedService, Arc<MemoryStore>, Arc<MemoryBlobs>) {
        let store = Arc::new(MemoryStore::default());
        let blobs = Arc::new(MemoryBlobs::default());
        let service = WrappedService::new(store.clone(), store.clone()).with_backup(blobs.clone());
        (service, store, blobs)
    }

    #[test]
    fn test_backup_key() {
        assert_eq!(backup_key("ABC"), "choku-save-ABC.sav");
        assert!(backup_key("ABC").starts_with(BACKUP_PREFIX));
    }

    #[test]
    fn test_duplicate_skips_recompute() -> Result<(), ServiceError> {
        let (service, store, _) = service();
        let bytes = save_blob(1);

        assert!(matches!(service.ingest(&bytes)?, IngestOutcome::Accepted(_)));
        assert!(matches!(service.ingest(&bytes)?, IngestOutcome::Duplicate(_)));
        assert_eq!(*store.replaced.lock().unwrap(), 1);
        assert_eq!(service.snapshot()?.num_submissions, 1);
        Ok(())
    }

    #[test]
    fn test_invalid_upload_touches_nothing() -> Result<(), ServiceError> {
        let (service, store, blobs) = service();
        let bytes = b"garbage".to_vec();

        let outcome = service.ingest(&bytes)?;
        assert_eq!(outcome, IngestOutcome::Invalid(content_hash(&bytes)));
        assert_eq!(outcome.label(), "invalid");
        assert!(store.records.lock().unwrap().is_empty());
        assert!(blobs.0.lock().unwrap().is_empty());
        assert_eq!(*store.replaced.lock().unwrap(), 0);
        Ok(())
    }

    #[test]
    fn test_snapshot_for_uppercases() -> Result<(), ServiceError> {
        let (service, _, _) = service();
        let hash = service.ingest(&save_blob(2))?.hash().to_string();

        let stats = service.snapshot_for(&hash.to_ascii_lowercase())?.unwrap();
        assert_eq!(stats.save_data.unwrap().sha256_hash, hash);
        assert!(service.snapshot_for("missing")?.is_none());
        Ok(())
    }

    #[test]
    fn test_refresh_recomputes_once() -> Result<(), ServiceError> {
        let (service, store, blobs) = service();
        service.ingest(&save_blob(3))?;
        service.ingest(&save_blob(4))?;
        blobs.put(&backup_key("BROKEN"), b"broken")?;
        store.records.lock().unwrap().clear();
        let before = *store.replaced.lock().unwrap();

        let report = service.refresh()?;
        assert_eq!(report, RefreshReport { restored: 2, skipped: 1 });
        assert_eq!(*store.replaced.lock().unwrap(), before + 1);
        assert_eq!(service.snapshot()?.num_submissions, 2);
        Ok(())
    }

    #[test]
    fn test_refresh_without_backup() {
        let store = Arc::new(MemoryStore::default());
        let service = WrappedService::new(store.clone(), store);
        assert!(!service.has_backup());
        assert!(matches!(service.refresh(), Err(ServiceError::BackupNotConfigured)));
    }
}
