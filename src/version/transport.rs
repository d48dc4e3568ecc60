//! Transport trait for fetching raw repository content

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching documents (directory listings, descriptors) from a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the body at `url`
    ///
    /// # Returns
    /// * `Ok(Some(body))` - The resource exists
    /// * `Ok(None)` - The resource does not exist (e.g. HTTP 404)
    /// * `Err(RegistryError)` - Any other failure; callers propagate it unchanged
    async fn fetch(&self, url: &str) -> Result<Option<String>, RegistryError>;
}

/// Fetches `url` and treats an empty body the same as a missing resource
pub async fn fetch_content(
    transport: &dyn Transport,
    url: &str,
) -> Result<Option<String>, RegistryError> {
    Ok(transport.fetch(url).await?.filter(|body| !body.is_empty()))
}
