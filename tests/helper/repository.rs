//! Repository test utilities

use mockito::{Mock, ServerGuard};

/// Render an Apache-style index page listing `names` as subdirectories
pub fn index_page(names: &[&str]) -> String {
    let entries: String = names
        .iter()
        .map(|name| format!("<a href=\"{name}/\" title=\"{name}/\">{name}/</a>\n"))
        .collect();
    format!(
        "<html>\n<body>\n<pre><a href=\"../\">../</a>\n{entries}<a href=\"maven-metadata.xml\">maven-metadata.xml</a>\n</pre>\n</body>\n</html>"
    )
}

/// Render a minimal POM with optional homepage and SCM URL
pub fn pom(homepage: Option<&str>, scm_url: Option<&str>) -> String {
    let homepage = homepage
        .map(|url| format!("    <url>{url}</url>\n"))
        .unwrap_or_default();
    let scm = scm_url
        .map(|url| format!("    <scm>\n        <url>{url}</url>\n    </scm>\n"))
        .unwrap_or_default();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n    <modelVersion>4.0.0</modelVersion>\n{homepage}{scm}</project>\n"
    )
}

/// Serve an index page at `path`
pub async fn serve_index(server: &mut ServerGuard, path: &str, names: &[&str]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(index_page(names))
        .create_async()
        .await
}

/// Serve a document at `path`
pub async fn serve_body(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await
}

/// Answer `path` with `status` and no body
pub async fn serve_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .create_async()
        .await
}
