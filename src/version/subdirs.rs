//! Artifact subdirectory discovery
//!
//! An sbt artifact is published under one directory per cross-build, e.g.
//! `cats-core_2.12/`, `cats-core_2.13/`, `cats-core_3/`. Scala Native and
//! Scala.js builds (`_native*`, `_sjs*`) are never candidates.

use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::listing::DirectoryListingParser;
use crate::version::transport::{Transport, fetch_content};
use crate::version::types::ensure_trailing_slash;

/// Whether the directory `name` holds builds of `artifact`
pub fn is_artifact_subdir(name: &str, artifact: &str) -> bool {
    if name == artifact {
        return true;
    }
    let cross_build_prefix = format!("{}_", artifact);
    let Some(suffix) = name.strip_prefix(&cross_build_prefix) else {
        return false;
    };
    !(suffix.starts_with("native") || suffix.starts_with("sjs"))
}

/// Select the artifact's subdirectories out of a search root listing
///
/// When the exact `{artifact}_{suffix}` directory is present, it is the only
/// one returned.
pub fn select_artifact_subdirs(
    parser: &DirectoryListingParser,
    content: &str,
    artifact: &str,
    platform_suffix: Option<&str>,
) -> Vec<String> {
    let subdirs = parser.parse(content, |name| is_artifact_subdir(name, artifact));

    if let Some(suffix) = platform_suffix {
        let exact = format!("{}_{}", artifact, suffix);
        if subdirs.contains(&exact) {
            return vec![exact];
        }
    }

    subdirs
}

/// Fetch the search root listing and discover the artifact's subdirectories
///
/// # Returns
/// * `Ok(None)` - The search root has no listing
/// * `Ok(Some(subdirs))` - The listing exists; `subdirs` may be empty
pub async fn discover_artifact_subdirs(
    transport: &dyn Transport,
    parser: &DirectoryListingParser,
    search_root: &str,
    artifact: &str,
    platform_suffix: Option<&str>,
) -> Result<Option<Vec<String>>, RegistryError> {
    let Some(content) = fetch_content(transport, &ensure_trailing_slash(search_root)).await? else {
        debug!("No listing at search root {}", search_root);
        return Ok(None);
    };

    let subdirs = select_artifact_subdirs(parser, &content, artifact, platform_suffix);
    debug!(
        "Discovered {} subdirectories for {} under {}",
        subdirs.len(),
        artifact,
        search_root
    );

    Ok(Some(subdirs))
}
