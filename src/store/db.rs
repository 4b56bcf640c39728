//! Record and aggregate store backed by fjall.

use std::path::Path;

use fjall::{Keyspace, KeyspaceCreateOptions, PersistMode};

use crate::logging::{debug, info, trace, warn};
use crate::save::SaveRecord;
use crate::stats::WrappedStats;

use super::error::StoreError;
use super::{AggregateStore, RecordStore};

const META_KEYSPACE: &str = "_meta";
const SAVES_KEYSPACE: &str = "saves";
const STATS_KEYSPACE: &str = "stats";

const META_CONFIG_KEY: &str = "config";
const STATS_KEY: &str = "current";

/// Current on-disk layout version.
/// Bump when the keyspace layout or the record encoding changes.
const STORE_VERSION: u32 = 1;

/// Decoded saves and the current snapshot, in one fjall database.
///
/// Records live in the `saves` keyspace keyed by their uppercase hex hash;
/// the snapshot is the single entry of the `stats` keyspace. Both are stored
/// as JSON. Every write is persisted with [`PersistMode::SyncAll`] before
/// returning.
///
/// ```ignore
/// use choku_wrapped::store::{RecordStore, WrappedStore};
///
/// let store = WrappedStore::open_or_init(".choku-wrapped")?;
/// for record in store.list_all()? {
///     println!("{}", record.sha256_hash);
/// }
/// ```
pub struct WrappedStore {
    db: fjall::Database,
    saves: Keyspace,
    stats: Keyspace,
}

impl WrappedStore {
    /// Open an existing store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening store");

        if !path.exists() {
            return Err(StoreError::NotInitialized(path.display().to_string()));
        }

        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace(META_KEYSPACE, KeyspaceCreateOptions::default)?;

        let Some(config) = meta.get(META_CONFIG_KEY)? else {
            warn!(path = %path.display(), "store has no version marker");
            return Err(StoreError::NotInitialized(path.display().to_string()));
        };
        let version = u32::from_le_bytes(
            config
                .as_ref()
                .try_into()
                .map_err(|_| StoreError::InvalidFormat("Invalid config format".to_string()))?,
        );
        if version != STORE_VERSION {
            return Err(StoreError::InvalidFormat(format!(
                "Store version mismatch: expected {}, got {}",
                STORE_VERSION, version
            )));
        }
        trace!(version = version, "store version verified");

        let store = Self::with_keyspaces(db)?;
        info!(path = %path.display(), "store opened");
        Ok(store)
    }

    /// Create a store at `path`, writing the version marker.
    pub fn init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "initializing store");

        let db = fjall::Database::builder(path).open()?;
        let meta = db.keyspace(META_KEYSPACE, KeyspaceCreateOptions::default)?;
        meta.insert(META_CONFIG_KEY, STORE_VERSION.to_le_bytes())?;
        db.persist(PersistMode::SyncAll)?;

        let store = Self::with_keyspaces(db)?;
        info!(path = %path.display(), version = STORE_VERSION, "store initialized");
        Ok(store)
    }

    /// Open the store at `path`, initializing it first if nothing is there.
    pub fn open_or_init(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        match Self::open(path.as_ref()) {
            Err(StoreError::NotInitialized(_)) => Self::init(path),
            other => other,
        }
    }

    fn with_keyspaces(db: fjall::Database) -> Result<Self, StoreError> {
        let saves = db.keyspace(SAVES_KEYSPACE, KeyspaceCreateOptions::default)?;
        let stats = db.keyspace(STATS_KEYSPACE, KeyspaceCreateOptions::default)?;
        Ok(Self { db, saves, stats })
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.keys(&self.saves).len())
    }

    fn keys(&self, keyspace: &Keyspace) -> Vec<Vec<u8>> {
        keyspace
            .iter()
            .filter_map(|kv| kv.key().ok().map(|k| k.to_vec()))
            .collect()
    }
}

impl RecordStore for WrappedStore {
    fn insert_if_absent(&self, record: &SaveRecord) -> Result<bool, StoreError> {
        let key = record.sha256_hash.as_str();
        if self.saves.get(key)?.is_some() {
            trace!(hash = key, "record already stored");
            return Ok(false);
        }

        self.saves.insert(key, serde_json::to_vec(record)?)?;
        self.db.persist(PersistMode::SyncAll)?;
        debug!(hash = key, "record stored");
        Ok(true)
    }

    fn find_by_hash(&self, hash: &str) -> Result<Option<SaveRecord>, StoreError> {
        let Some(bytes) = self.saves.get(hash)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn list_all(&self) -> Result<Vec<SaveRecord>, StoreError> {
        let mut records = Vec::new();
        for key in self.keys(&self.saves) {
            // Removed between the key scan and the read.
            let Some(bytes) = self.saves.get(&key)? else {
                continue;
            };
            records.push(serde_json::from_slice(&bytes)?);
        }
        Ok(records)
    }

    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn delete_all(&self) -> Result<(), StoreError> {
        let keys = self.keys(&self.saves);
        let removed = keys.len();
        for key in keys {
            self.saves.remove(&key)?;
        }
        self.db.persist(PersistMode::SyncAll)?;
        info!(removed = removed, "all records deleted");
        Ok(())
    }
}

impl AggregateStore for WrappedStore {
    fn replace_singleton(&self, stats: &WrappedStats) -> Result<(), StoreError> {
        self.stats.insert(STATS_KEY, serde_json::to_vec(stats)?)?;
        self.db.persist(PersistMode::SyncAll)?;
        debug!(submissions = stats.num_submissions, "snapshot replaced");
        Ok(())
    }

    fn read_singleton(&self) -> Result<Option<WrappedStats>, StoreError> {
        let Some(bytes) = self.stats.get(STATS_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
