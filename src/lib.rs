//! Save decoder and community statistics for Chokuretsu Wrapped.
//!
//! Players upload the save file of a finished Suzumiya Haruhi no Chokuretsu
//! playthrough. Each upload is decoded into a [`SaveRecord`] of gameplay
//! facts (routes taken, topics collected, ending unlocked, episode choices)
//! and the whole corpus is folded into one [`WrappedStats`] snapshot.
//!
//! # Quick Start
//!
//! ```ignore
//! use choku_wrapped::prelude::*;
//!
//! let record = decode(&std::fs::read("chokuretsu.sav")?);
//! println!("valid: {}, ending: {}", record.is_valid, record.unlocked_ending);
//!
//! let service = WrappedService::from_store(WrappedStore::open_or_init(".choku-wrapped")?);
//! service.ingest(&std::fs::read("chokuretsu.sav")?)?;
//! println!("{} submissions", service.snapshot()?.num_submissions);
//! ```
//!
//! # Modules
//!
//! - [`save`] - Container parsing, flag rules and record decoding (always available)
//! - [`tables`] - Static route and topic tables (always available)
//! - [`stats`] - Corpus aggregation (always available)
//! - [`store`] - fjall record store and blob backup (requires `store` feature)
//! - [`service`] - Ingest, recompute and refresh orchestration
//! - [`server`] - HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `store` - Enable the fjall store and directory backup (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

mod logging;
pub mod prelude;
pub mod save;
#[cfg(feature = "server")]
pub mod server;
pub mod service;
pub mod stats;
pub mod store;
pub mod tables;

mod error;

pub use error::{Error, Result};

pub use save::{SaveError, SaveRecord, decode};
pub use service::{IngestOutcome, RefreshReport, ServiceError, WrappedService};
pub use stats::{WrappedStats, aggregate};
#[cfg(feature = "store")]
pub use store::{DirBlobStore, WrappedStore};
pub use store::{AggregateStore, BlobStore, RecordStore, StoreError};
