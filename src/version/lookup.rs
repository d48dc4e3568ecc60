//! Release lookup across configured registries

use std::sync::Arc;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::version::comparator::VersionComparator;
use crate::version::error::RegistryError;
use crate::version::fallback::first_some;
use crate::version::http::HttpTransport;
use crate::version::hunter::RepositoryHunter;
use crate::version::maven::MavenComparator;
use crate::version::transport::Transport;
use crate::version::types::{PackageIdentifier, ReleaseResult};

/// Looks up releases of sbt packages, hunting registries in configured order
pub struct ReleaseLookup {
    hunter: RepositoryHunter,
    registry_urls: Vec<String>,
}

impl ReleaseLookup {
    pub fn new(
        transport: Arc<dyn Transport>,
        comparator: Arc<dyn VersionComparator>,
        registry_urls: Vec<String>,
    ) -> Self {
        Self {
            hunter: RepositoryHunter::new(transport, comparator),
            registry_urls,
        }
    }

    /// Creates a ReleaseLookup using HTTP and Maven ordering
    pub fn from_config(config: &ResolverConfig) -> Result<Self, RegistryError> {
        Ok(Self::new(
            Arc::new(HttpTransport::new(&config.http)?),
            Arc::new(MavenComparator),
            config.registry_urls.clone(),
        ))
    }

    /// Fetch releases for `lookup_name` (`group:artifact[_suffix]`)
    ///
    /// The first registry with a result wins; later registries are not queried.
    pub async fn get_releases(
        &self,
        lookup_name: &str,
    ) -> Result<Option<ReleaseResult>, RegistryError> {
        let package = PackageIdentifier::parse(lookup_name)?;

        first_some(&self.registry_urls, |registry_url| {
            debug!("Looking up {} in {}", lookup_name, registry_url);
            self.hunter.hunt(&package, registry_url)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::transport::MockTransport;
    use mockall::predicate::eq;

    fn listing(names: &[&str]) -> String {
        names
            .iter()
            .map(|name| format!("<a href=\"{name}/\">{name}/</a>\n"))
            .collect()
    }

    #[tokio::test]
    async fn get_releases_hunts_registries_in_order() {
        let mut transport = MockTransport::new();
        transport
            .expect_fetch()
            .with(eq("https://first/org/example/"))
            .returning(|_| Ok(None));
        transport
            .expect_fetch()
            .with(eq("https://first/org.example/"))
            .returning(|_| Ok(None));
        transport
            .expect_fetch()
            .with(eq("https://second/org/example/"))
            .returning(|_| Ok(Some(listing(&["foo_2.13"]))));
        transport
            .expect_fetch()
            .with(eq("https://second/org/example/foo_2.13/"))
            .returning(|_| Ok(Some(listing(&["0.1.0"]))));
        transport
            .expect_fetch()
            .with(eq("https://second/org/example/foo_2.13/0.1.0/foo_2.13-0.1.0.pom"))
            .returning(|_| Ok(Some("<project><url>https://foo.dev</url></project>".to_string())));

        let lookup = ReleaseLookup::new(
            Arc::new(transport),
            Arc::new(MavenComparator),
            vec!["https://first".to_string(), "https://second/".to_string()],
        );
        let result = lookup
            .get_releases("org.example:foo_2.13")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.dependency_url, "https://second/org/example");
        assert_eq!(result.versions, vec!["0.1.0".to_string()]);
        assert_eq!(result.homepage.as_deref(), Some("https://foo.dev"));
    }

    #[tokio::test]
    async fn get_releases_rejects_malformed_lookup_name_before_any_request() {
        let mut transport = MockTransport::new();
        transport.expect_fetch().never();

        let lookup = ReleaseLookup::new(
            Arc::new(transport),
            Arc::new(MavenComparator),
            vec!["https://repo".to_string()],
        );
        let result = lookup.get_releases("not-a-coordinate").await;

        assert!(matches!(result, Err(RegistryError::InvalidPackageName(_))));
    }

    #[tokio::test]
    async fn get_releases_returns_none_without_registries() {
        let transport = MockTransport::new();

        let lookup = ReleaseLookup::new(Arc::new(transport), Arc::new(MavenComparator), vec![]);
        let result = lookup.get_releases("org.example:foo").await.unwrap();

        assert_eq!(result, None);
    }
}
