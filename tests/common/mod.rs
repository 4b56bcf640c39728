//! Common test utilities and fixtures.
//!
//! Synthetic save blobs plus a [`TestApp`] wrapping the router over
//! temporary on-disk stores.

#![cfg(feature = "store")]
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use choku_wrapped::save::fixture::SlotBuilder;
use choku_wrapped::{DirBlobStore, WrappedService, WrappedStore};

// =============================================================================
// Save Blobs
// =============================================================================

/// Flag of the fourth route in the first objective group (Koizumi, side President).
pub const KOIZUMI_ROUTE: u16 = 1025;

/// Two topic flags with catalog entries.
pub const TOPICS: [u16; 2] = [122, 130];

/// A completed save; `n` varies the content hash.
pub fn completed_save(n: u8) -> Vec<u8> {
    SlotBuilder::completed()
        .saved_at(2024, 6, 1, 12, 0, n)
        .into_save()
}

/// The reference playthrough: friendship, two topics and one route.
pub fn reference_save() -> Vec<u8> {
    SlotBuilder::completed()
        .friendship([3, 0, 5, 0, 0])
        .flags(&TOPICS)
        .flag(KOIZUMI_ROUTE)
        .into_save()
}

/// A save whose only slot lacks the completion flags.
pub fn unfinished_save() -> Vec<u8> {
    SlotBuilder::new().into_save()
}

// =============================================================================
// Stores
// =============================================================================

/// Fresh on-disk stores under one temporary directory.
pub struct TestStores {
    pub temp_dir: TempDir,
}

impl TestStores {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("db")
    }

    pub fn backup_path(&self) -> PathBuf {
        self.temp_dir.path().join("backup")
    }

    pub fn service(&self) -> anyhow::Result<WrappedService> {
        Ok(WrappedService::from_store(WrappedStore::open_or_init(
            self.db_path(),
        )?))
    }

    pub fn service_with_backup(&self) -> anyhow::Result<WrappedService> {
        let backup = DirBlobStore::new(self.backup_path())?;
        Ok(self.service()?.with_backup(Arc::new(backup)))
    }
}

// =============================================================================
// Test Application
// =============================================================================

#[cfg(feature = "server")]
pub use app::TestApp;

#[cfg(feature = "server")]
mod app {
    use axum_test::TestServer;
    use axum_test::multipart::{MultipartForm, Part};

    use choku_wrapped::server::{AppState, router};

    use super::TestStores;

    /// Refresh secret configured on [`TestApp::new`].
    pub const SECRET: &str = "hunter2";

    /// Test application wrapper that manages temporary stores.
    pub struct TestApp {
        pub server: TestServer,
        pub stores: TestStores, // Keep alive for test duration
    }

    impl TestApp {
        /// Backups enabled and [`SECRET`] configured.
        pub fn new() -> anyhow::Result<Self> {
            Self::build(true, Some(SECRET), None)
        }

        /// Neither backups nor a refresh secret.
        pub fn bare() -> anyhow::Result<Self> {
            Self::build(false, None, None)
        }

        pub fn build(
            backup: bool,
            secret: Option<&str>,
            max_upload_bytes: Option<usize>,
        ) -> anyhow::Result<Self> {
            let stores = TestStores::new()?;
            let service = if backup {
                stores.service_with_backup()?
            } else {
                stores.service()?
            };
            let mut state = AppState::new(service, secret);
            if let Some(limit) = max_upload_bytes {
                state = state.with_max_upload_bytes(limit);
            }
            let server = TestServer::new(router(state))?;
            Ok(Self { server, stores })
        }

        /// Upload `bytes` as the save file and return the text reply.
        pub async fn upload(&self, bytes: Vec<u8>) -> String {
            let form = MultipartForm::new().add_part(
                "file",
                Part::bytes(bytes)
                    .file_name("chokuretsu.sav")
                    .mime_type("application/octet-stream"),
            );
            let response = self.server.post("/choku-wrapped/").multipart(form).await;
            response.assert_status_ok();
            response.text()
        }
    }
}

#[cfg(feature = "server")]
pub use app::SECRET;
