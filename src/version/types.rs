//! Common types for the release lookup pipeline

use serde::Serialize;

use crate::version::error::RegistryError;

/// Package coordinates parsed from `group:artifact[_suffix]`
///
/// # Examples
/// - `org.typelevel:cats-core_2.13` -> group `[org, typelevel]`, artifact `cats-core`, suffix `2.13`
/// - `com.example:lib` -> group `[com, example]`, artifact `lib`, no suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentifier {
    pub group_segments: Vec<String>,
    pub artifact: String,
    /// Language-binary or platform version (e.g. the Scala binary version)
    pub platform_suffix: Option<String>,
}

impl PackageIdentifier {
    pub fn parse(lookup_name: &str) -> Result<Self, RegistryError> {
        let invalid = || RegistryError::InvalidPackageName(lookup_name.to_string());

        let mut parts = lookup_name.split(':');
        let group_id = parts.next().filter(|g| !g.is_empty()).ok_or_else(invalid)?;
        let artifact_id = parts.next().filter(|a| !a.is_empty()).ok_or_else(invalid)?;

        let mut artifact_parts = artifact_id.split('_');
        let artifact = artifact_parts
            .next()
            .filter(|a| !a.is_empty())
            .ok_or_else(invalid)?;
        let platform_suffix = artifact_parts
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            group_segments: group_id.split('.').map(str::to_string).collect(),
            artifact: artifact.to_string(),
            platform_suffix,
        })
    }

    /// Search roots under a repository, namespaced layout first, flat legacy layout second.
    /// Identical roots (single-segment groups) are only listed once.
    pub fn search_roots(&self, registry_url: &str) -> Vec<String> {
        let repo_root = ensure_trailing_slash(registry_url);
        let mut roots = vec![format!("{}{}", repo_root, self.group_segments.join("/"))];
        let flat = format!("{}{}", repo_root, self.group_segments.join("."));
        if !roots.contains(&flat) {
            roots.push(flat);
        }
        roots
    }
}

/// Homepage and source URL recovered from a project descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Result of a successful lookup. `versions` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResult {
    /// Unique versions, ascending by the comparator
    pub versions: Vec<String>,
    /// Search root the versions were found under
    pub dependency_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ReleaseResult {
    pub fn new(versions: Vec<String>, dependency_url: String, urls: ProjectUrls) -> Self {
        Self {
            versions,
            dependency_url,
            homepage: urls.homepage,
            source_url: urls.source_url,
        }
    }
}

pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
