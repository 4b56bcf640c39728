//! Application state management.

use std::sync::Arc;

use crate::service::WrappedService;
use crate::store::{DirBlobStore, StoreError, WrappedStore};

use super::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<WrappedService>,
    refresh_secret: Option<Arc<str>>,
    max_upload_bytes: usize,
}

/// Upload limit used when none is configured.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024;

impl AppState {
    /// Open (or create) the stores named in `config`.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let store =
            WrappedStore::open_or_init(&config.storage.path).map_err(|e| StateError::OpenStore {
                path: config.storage.path.display().to_string(),
                source: e,
            })?;
        let mut service = WrappedService::from_store(store);

        if let Some(backup_path) = &config.storage.backup_path {
            let backup = DirBlobStore::new(backup_path).map_err(|e| StateError::OpenBackup {
                path: backup_path.display().to_string(),
                source: e,
            })?;
            service = service.with_backup(Arc::new(backup));
        }

        Ok(Self::new(service, config.refresh.secret.as_deref())
            .with_max_upload_bytes(config.server.max_upload_bytes))
    }

    pub fn new(service: WrappedService, refresh_secret: Option<&str>) -> Self {
        Self {
            service: Arc::new(service),
            refresh_secret: refresh_secret.filter(|s| !s.is_empty()).map(Arc::from),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn service(&self) -> &Arc<WrappedService> {
        &self.service
    }

    pub fn refresh_secret(&self) -> Option<&str> {
        self.refresh_secret.as_deref()
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open or initialize the record store.
    OpenStore { path: String, source: StoreError },
    /// Failed to create the backup directory.
    OpenBackup { path: String, source: StoreError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenStore { path, source } => {
                write!(f, "Failed to open store at '{}': {}", path, source)
            }
            StateError::OpenBackup { path, source } => {
                write!(f, "Failed to open backup directory '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}
