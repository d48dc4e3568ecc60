//! Directory listing parser
//!
//! Repository index pages are plain HTML listings. Subdirectories appear as
//! anchors whose `href` ends in `/`; everything else (files, checksums,
//! absolute links without a trailing slash) is ignored.

use regex::Regex;

pub struct DirectoryListingParser {
    dir_href_re: Regex,
}

impl DirectoryListingParser {
    pub fn new() -> Self {
        Self {
            // href='name/' or href="name/"
            dir_href_re: Regex::new(r#"href=['"]([^'"]*)/['"]"#).unwrap(),
        }
    }

    /// Extract directory entry names for which `select` holds
    ///
    /// Entries are returned in the order they appear in the listing.
    /// Duplicates are kept.
    pub fn parse<F>(&self, content: &str, select: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.dir_href_re
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| select(name))
            .map(str::to_string)
            .collect()
    }
}

impl Default for DirectoryListingParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parent/self links such as `.` and `..`
pub fn is_navigation_entry(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c == '.')
}
