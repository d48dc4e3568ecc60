//! Repository hunt across candidate search roots
//!
//! A group id can be laid out as nested directories (`org/example/`) or as a
//! single flat directory (`org.example/`). Each layout is a search root; the
//! first root that yields versions provides the whole result.

use std::sync::Arc;

use tracing::{debug, info};

use crate::version::comparator::VersionComparator;
use crate::version::error::RegistryError;
use crate::version::fallback::first_some;
use crate::version::latest::latest_version;
use crate::version::listing::DirectoryListingParser;
use crate::version::metadata::fetch_project_urls;
use crate::version::releases::collect_versions;
use crate::version::subdirs::discover_artifact_subdirs;
use crate::version::transport::Transport;
use crate::version::types::{PackageIdentifier, ReleaseResult};

/// Runs the discovery pipeline against each search root of a repository
pub struct RepositoryHunter {
    transport: Arc<dyn Transport>,
    comparator: Arc<dyn VersionComparator>,
    parser: DirectoryListingParser,
}

impl RepositoryHunter {
    pub fn new(transport: Arc<dyn Transport>, comparator: Arc<dyn VersionComparator>) -> Self {
        Self {
            transport,
            comparator,
            parser: DirectoryListingParser::new(),
        }
    }

    /// Hunt for `package` in the repository at `registry_url`
    ///
    /// # Returns
    /// * `Ok(Some(result))` - Versions found under one of the search roots
    /// * `Ok(None)` - No search root holds the package
    /// * `Err(RegistryError)` - Transport or descriptor failure
    pub async fn hunt(
        &self,
        package: &PackageIdentifier,
        registry_url: &str,
    ) -> Result<Option<ReleaseResult>, RegistryError> {
        let search_roots = package.search_roots(registry_url);
        let roots_tried = search_roots.len();

        let result = first_some(search_roots, |search_root| {
            self.hunt_search_root(package, search_root)
        })
        .await?;

        if result.is_none() {
            info!(
                "No versions found for {}:{} in {} repositories",
                package.group_segments.join("."),
                package.artifact,
                roots_tried
            );
        }

        Ok(result)
    }

    async fn hunt_search_root(
        &self,
        package: &PackageIdentifier,
        search_root: String,
    ) -> Result<Option<ReleaseResult>, RegistryError> {
        debug!("Searching {} in {}", package.artifact, search_root);

        let transport = self.transport.as_ref();
        let comparator = self.comparator.as_ref();

        let artifact_subdirs = discover_artifact_subdirs(
            transport,
            &self.parser,
            &search_root,
            &package.artifact,
            package.platform_suffix.as_deref(),
        )
        .await?;

        let Some(versions) = collect_versions(
            transport,
            &self.parser,
            comparator,
            &search_root,
            artifact_subdirs.as_deref(),
        )
        .await?
        else {
            return Ok(None);
        };

        let latest = latest_version(&versions, comparator);
        let urls = fetch_project_urls(
            transport,
            &search_root,
            artifact_subdirs.as_deref(),
            latest.as_deref(),
        )
        .await?;

        Ok(Some(ReleaseResult::new(versions, search_root, urls)))
    }
}
