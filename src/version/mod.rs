//! Release discovery for packages in directory-listing repositories
//!
//! Maven-layout repositories expose no query API for sbt cross-built
//! artifacts, so versions are inferred from the HTML index pages.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lookup    │────▶│   Hunter    │────▶│  Transport  │
//! │ (registries)│     │(search root)│     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!        ┌──────────┬────────┴─┬──────────┐
//!        ▼          ▼          ▼          ▼
//!   ┌─────────┐┌─────────┐┌─────────┐┌──────────┐
//!   │ Subdirs ││Releases ││ Latest  ││ Metadata │
//!   └─────────┘└─────────┘└─────────┘└──────────┘
//! ```
//!
//! # Modules
//!
//! - [`lookup`]: Hunts configured registries in order
//! - [`hunter`]: Runs the pipeline against each search root of a registry
//! - [`subdirs`]: Finds the artifact's cross-build subdirectories
//! - [`releases`]: Collects, deduplicates and sorts versions
//! - [`latest`]: Picks the latest version
//! - [`metadata`]: Reads homepage and source URL from the POM
//! - [`listing`]: Extracts directory entries from index pages
//! - [`pom`]: Path lookup in POM documents
//! - [`fallback`]: Ordered first-success evaluation
//! - [`transport`]/[`http`]: Fetching raw content
//! - [`comparator`]/[`maven`]: Version ordering
//! - [`error`]: Error types
//! - [`types`]: Package coordinates and results

pub mod comparator;
pub mod error;
pub mod fallback;
pub mod http;
pub mod hunter;
pub mod latest;
pub mod listing;
pub mod lookup;
pub mod maven;
pub mod metadata;
pub mod pom;
pub mod releases;
pub mod subdirs;
pub mod transport;
pub mod types;
