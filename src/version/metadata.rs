//! Project metadata recovery from POM descriptors

use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::fallback::first_some;
use crate::version::pom::PomDocument;
use crate::version::transport::{Transport, fetch_content};
use crate::version::types::ProjectUrls;

/// Descriptor URLs to probe, in order
///
/// For every subdirectory: `{subdir}-{version}.pom`, then the same file
/// named after the artifact without its cross-build suffix.
pub fn descriptor_candidates(
    search_root: &str,
    artifact_subdirs: &[String],
    version: &str,
) -> Vec<String> {
    artifact_subdirs
        .iter()
        .flat_map(|subdir| {
            let artifact = subdir.split('_').next().unwrap_or(subdir);
            [
                format!("{}-{}.pom", subdir, version),
                format!("{}-{}.pom", artifact, version),
            ]
            .into_iter()
            .map(move |file_name| format!("{}/{}/{}/{}", search_root, subdir, version, file_name))
        })
        .collect()
}

/// Rewrite an SCM URL into a browsable HTTPS URL
///
/// `scm:git:git@github.com:org/repo.git` -> `https://github.com/org/repo`
pub fn normalize_source_url(raw: &str) -> String {
    let url = raw.strip_prefix("scm:").unwrap_or(raw);
    let url = url.strip_prefix("git:").unwrap_or(url);
    let url = match url.strip_prefix("git@github.com:") {
        Some(path) => format!("https://github.com/{}", path),
        None => url.to_string(),
    };
    match url.strip_suffix(".git") {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}

/// Extract homepage and source URL from a descriptor body
pub fn extract_project_urls(content: &str) -> Result<ProjectUrls, RegistryError> {
    let pom = PomDocument::parse(content)?;
    Ok(ProjectUrls {
        homepage: pom.value_with_path("url"),
        source_url: pom
            .value_with_path("scm.url")
            .map(|url| normalize_source_url(&url)),
    })
}

/// Fetch project URLs for `version` from the first descriptor that exists
///
/// Only one descriptor is ever parsed, even if it lacks both fields.
/// Returns empty urls without any request when subdirs or version are absent.
pub async fn fetch_project_urls(
    transport: &dyn Transport,
    search_root: &str,
    artifact_subdirs: Option<&[String]>,
    version: Option<&str>,
) -> Result<ProjectUrls, RegistryError> {
    let (Some(artifact_subdirs), Some(version)) = (artifact_subdirs, version) else {
        return Ok(ProjectUrls::default());
    };
    if artifact_subdirs.is_empty() {
        return Ok(ProjectUrls::default());
    }

    let candidates = descriptor_candidates(search_root, artifact_subdirs, version);
    let descriptor = first_some(candidates, |url| async move {
        let content = fetch_content(transport, &url).await?;
        if content.is_some() {
            debug!("Found descriptor {}", url);
        }
        Ok::<_, RegistryError>(content)
    })
    .await?;

    match descriptor {
        Some(content) => extract_project_urls(&content),
        None => {
            debug!("No descriptor for {} under {}", version, search_root);
            Ok(ProjectUrls::default())
        }
    }
}
