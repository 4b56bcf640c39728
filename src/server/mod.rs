//! HTTP API server for Chokuretsu Wrapped.
//!
//! Serves the aggregate snapshot, accepts save uploads and exposes the
//! administrative refresh endpoint on top of [`WrappedService`](crate::WrappedService).

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{
    Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, RefreshConfig, ServerConfig,
    StorageConfig,
};
pub use error::ApiError;
pub use logging::{LoggingError, init as init_logging};
pub use routes::{INVALID_SAVE, NO_SAVE_DATA, router};
pub use state::{AppState, DEFAULT_MAX_UPLOAD_BYTES, StateError};
