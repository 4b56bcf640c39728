//! Unified error type for the choku-wrapped library.

use thiserror::Error;

use crate::save::SaveError;
use crate::service::ServiceError;
use crate::store::StoreError;

/// Any error the library can return.
///
/// ```ignore
/// use choku_wrapped::{Result, WrappedService, WrappedStore};
///
/// fn ingest(path: &str) -> Result<()> {
///     let service = WrappedService::from_store(WrappedStore::open_or_init(".choku-wrapped")?);
///     service.ingest(&std::fs::read(path)?)?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A save blob could not be decoded.
    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a save decoding error.
    pub fn is_save(&self) -> bool {
        matches!(self, Self::Save(_))
    }

    /// Returns `true` if a store failure caused this error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Service(ServiceError::Store(_)))
    }
}
