use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(#[from] roxmltree::Error),

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),
}
