//! Latest version selection

use std::cmp::Ordering;

use crate::version::comparator::VersionComparator;

/// Pick the latest version by pairwise reduction
///
/// The accumulator starts at the first version and is only replaced by a
/// candidate the comparator reports as strictly greater, so among equal
/// versions the earliest one wins.
pub fn latest_version(versions: &[String], comparator: &dyn VersionComparator) -> Option<String> {
    let (first, rest) = versions.split_first()?;
    let latest = rest.iter().fold(first, |latest, candidate| {
        if comparator.compare(candidate, latest) == Ordering::Greater {
            candidate
        } else {
            latest
        }
    });
    Some(latest.clone())
}
