//! Version collection across artifact subdirectories

use indexmap::IndexSet;
use tracing::debug;

use crate::version::comparator::VersionComparator;
use crate::version::error::RegistryError;
use crate::version::listing::{DirectoryListingParser, is_navigation_entry};
use crate::version::transport::{Transport, fetch_content};
use crate::version::types::ensure_trailing_slash;

/// Collect the versions published under every artifact subdirectory
///
/// Subdirectories are listed one at a time in discovery order. A missing
/// listing contributes nothing; transport errors abort the collection.
///
/// # Returns
/// * `Ok(Some(versions))` - Unique versions sorted ascending by `comparator`
/// * `Ok(None)` - No subdirectory yielded any version
pub async fn collect_versions(
    transport: &dyn Transport,
    parser: &DirectoryListingParser,
    comparator: &dyn VersionComparator,
    search_root: &str,
    artifact_subdirs: Option<&[String]>,
) -> Result<Option<Vec<String>>, RegistryError> {
    let Some(artifact_subdirs) = artifact_subdirs else {
        return Ok(None);
    };

    let mut releases: Vec<String> = Vec::new();
    for subdir in artifact_subdirs {
        let url = ensure_trailing_slash(&format!("{}/{}", search_root, subdir));
        match fetch_content(transport, &url).await? {
            Some(content) => {
                let found = parser.parse(&content, |name| !is_navigation_entry(name));
                debug!("Found {} entries under {}", found.len(), url);
                releases.extend(found);
            }
            None => debug!("No listing under {}", url),
        }
    }

    if releases.is_empty() {
        return Ok(None);
    }

    let mut versions: IndexSet<String> = releases.into_iter().collect();
    versions.sort_by(|a, b| comparator.compare(a, b));

    Ok(Some(versions.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::maven::MavenComparator;
    use crate::version::transport::MockTransport;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn listing(names: &[&str]) -> String {
        names
            .iter()
            .map(|name| format!("<a href=\"{name}/\">{name}/</a>\n"))
            .collect()
    }

    fn subdirs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn collect_versions_filters_navigation_and_sorts_numerically() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch()
            .with(eq("https://repo/org/example/foo_2.13/"))
            .returning(|_| Ok(Some(listing(&[".", "..", "1.0", "1.2", "1.10"]))));

        let subdirs = subdirs(&["foo_2.13"]);
        let result = collect_versions(
            &transport,
            &DirectoryListingParser::new(),
            &MavenComparator,
            "https://repo/org/example",
            Some(subdirs.as_slice()),
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            Some(vec!["1.0".to_string(), "1.2".to_string(), "1.10".to_string()])
        );
    }

    #[tokio::test]
    async fn collect_versions_pools_and_deduplicates_in_discovery_order() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport
            .expect_fetch()
            .with(eq("https://repo/org/example/foo_2.12/"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(listing(&["1.0", "1.1"]))));
        transport
            .expect_fetch()
            .with(eq("https://repo/org/example/foo_2.13/"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(listing(&["1.1", "2.0"]))));

        let subdirs = subdirs(&["foo_2.12", "foo_2.13"]);
        let result = collect_versions(
            &transport,
            &DirectoryListingParser::new(),
            &MavenComparator,
            "https://repo/org/example",
            Some(subdirs.as_slice()),
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            Some(vec!["1.0".to_string(), "1.1".to_string(), "2.0".to_string()])
        );
    }

    #[tokio::test]
    async fn collect_versions_skips_missing_subdirectory_listings() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch()
            .with(eq("https://repo/org/example/foo/"))
            .returning(|_| Ok(None));
        transport
            .expect_fetch()
            .with(eq("https://repo/org/example/foo_2.13/"))
            .returning(|_| Ok(Some(listing(&["0.9"]))));

        let subdirs = subdirs(&["foo", "foo_2.13"]);
        let result = collect_versions(
            &transport,
            &DirectoryListingParser::new(),
            &MavenComparator,
            "https://repo/org/example",
            Some(subdirs.as_slice()),
        )
        .await
        .unwrap();

        assert_eq!(result, Some(vec!["0.9".to_string()]));
    }

    #[tokio::test]
    async fn collect_versions_returns_none_when_nothing_is_found() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch()
            .returning(|_| Ok(Some(listing(&["..", "."]))));

        let subdirs = subdirs(&["foo"]);
        let result = collect_versions(
            &transport,
            &DirectoryListingParser::new(),
            &MavenComparator,
            "https://repo/org/example",
            Some(subdirs.as_slice()),
        )
        .await
        .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn collect_versions_returns_none_without_fetching_when_subdirs_are_absent() {
        let mut transport = MockTransport::new();
        transport.expect_fetch().never();

        let parser = DirectoryListingParser::new();
        let absent = collect_versions(&transport, &parser, &MavenComparator, "https://repo", None)
            .await
            .unwrap();
        let empty = collect_versions(
            &transport,
            &parser,
            &MavenComparator,
            "https://repo",
            Some(&[][..]),
        )
        .await
        .unwrap();

        assert_eq!(absent, None);
        assert_eq!(empty, None);
    }

    #[tokio::test]
    async fn collect_versions_propagates_transport_errors() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch()
            .times(1)
            .returning(|_| Err(RegistryError::RateLimited { retry_after_secs: None }));

        let subdirs = subdirs(&["foo", "foo_2.13"]);
        let result = collect_versions(
            &transport,
            &DirectoryListingParser::new(),
            &MavenComparator,
            "https://repo/org/example",
            Some(subdirs.as_slice()),
        )
        .await;

        assert!(matches!(result, Err(RegistryError::RateLimited { .. })));
    }
}
