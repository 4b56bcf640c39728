//! Library-level log macros.
//!
//! With the `logging` feature these expand to the matching `tracing` macro;
//! without it they expand to nothing, so the library never forces a
//! subscriber on embedders.
//!
//! ```rust,ignore
//! use crate::logging::{debug, info};
//!
//! info!(path = %path.display(), "store opened");
//! debug!(hash = %hash, "duplicate save");
//! ```

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Per-record detail: duplicates, rejected uploads, individual writes.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Lifecycle: store opened, save accepted, refresh finished.
#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

/// Handled but suspicious: missing markers, unreadable backups.
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_debug as debug;
pub(crate) use log_info as info;
pub(crate) use log_trace as trace;
pub(crate) use log_warn as warn;
