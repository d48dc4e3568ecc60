use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Maven Central, the default registry
pub const MAVEN_REPO: &str = "https://repo.maven.apache.org/maven2";

/// Timeout for a single HTTP request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_USER_AGENT: &str = "sbt-package-resolver";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Registries hunted in order, first hit wins
    pub registry_urls: Vec<String>,
    pub http: HttpConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            registry_urls: vec![MAVEN_REPO.to_string()],
            http: HttpConfig::default(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a JSON file; missing fields use defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the configured registries when any are given
    pub fn with_registry_urls(mut self, registry_urls: Vec<String>) -> Self {
        if !registry_urls.is_empty() {
            self.registry_urls = registry_urls;
        }
        self
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

/// Returns the path to the data directory for sbt-package-resolver.
/// Uses $XDG_DATA_HOME/sbt-package-resolver if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/sbt-package-resolver,
/// or ./sbt-package-resolver if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("sbt-package-resolver.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("sbt-package-resolver")
}
