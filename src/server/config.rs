//! Server configuration parsing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Server configuration loaded from a TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: super::state::DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Where records and backups live.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// fjall database directory.
    pub path: PathBuf,
    /// Directory for raw upload backups. Refresh is unavailable without it.
    #[serde(default)]
    pub backup_path: Option<PathBuf>,
}

/// Administrative refresh settings.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshConfig {
    /// Shared secret expected as the refresh request body.
    #[serde(default)]
    pub secret: Option<String>,
}

/// Cross-origin settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// Allowed origins; `"*"` allows any.
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origins: vec![
                "https://haroohie.club".to_string(),
                "http://localhost:3000".to_string(),
            ],
            allow_methods: vec!["GET".to_string(), "POST".to_string()],
            allow_headers: Vec::new(),
            max_age: 3600,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Tracing subscriber settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "choku_wrapped=debug,tower_http=info".
    pub level: String,
    pub format: LogFormat,
    /// "stdout", "stderr" or a file path.
    pub output: String,
    pub color: bool,
    pub timestamps: bool,
    pub target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            color: true,
            timestamps: true,
            target: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 9000
max_upload_bytes = 16384

[storage]
path = "/var/lib/choku-wrapped"
backup_path = "/var/lib/choku-wrapped/backup"

[refresh]
secret = "hunter2"

[cors]
enabled = false
allow_origins = ["*"]

[logging]
level = "debug"
format = "json"
output = "stdout"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.server.max_upload_bytes, 16384);
        assert_eq!(config.storage.path, PathBuf::from("/var/lib/choku-wrapped"));
        assert!(config.storage.backup_path.is_some());
        assert_eq!(config.refresh.secret.as_deref(), Some("hunter2"));
        assert!(!config.cors.enabled);
        assert_eq!(config.cors.allow_methods, vec!["GET", "POST"]);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_only_storage_is_required() {
        let config = Config::parse("[storage]\npath = \".choku-wrapped\"\n").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.server.max_upload_bytes, 65536);
        assert!(config.storage.backup_path.is_none());
        assert!(config.refresh.secret.is_none());
        assert!(config.cors.enabled);
        assert_eq!(config.logging.level, "info");

        assert!(matches!(Config::parse(""), Err(ConfigError::Parse(_))));
    }
}
