//! Version ordering abstraction

use std::cmp::Ordering;

/// Trait for ecosystem-specific total orders over version strings
///
/// Implementations must understand the ecosystem's version grammar:
/// segment "10" sorts after "2", qualifiers rank below or above releases, etc.
pub trait VersionComparator: Send + Sync {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<F> VersionComparator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self(left, right)
    }
}
