//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use choku_wrapped::prelude::*;
//!
//! let stats = aggregate(&[decode(&bytes)]);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Decoding
pub use crate::save::{FriendshipLevels, SaveError, SaveRecord, content_hash, decode, try_decode};
pub use crate::tables::{
    Character, Ending, Ep1ActivityGuess, Ep1MemoryCard, Ep1Resolution, GameOverTutorial, Route,
    SideCharacter, Topic,
};

// Aggregation
pub use crate::stats::{RouteAggregate, TopicAggregate, WrappedStats, aggregate};

// Persistence and orchestration
pub use crate::service::{IngestOutcome, RefreshReport, ServiceError, WrappedService};
#[cfg(feature = "store")]
pub use crate::store::{DirBlobStore, WrappedStore};
pub use crate::store::{AggregateStore, BlobStore, RecordStore, StoreError};
