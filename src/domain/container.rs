//! Container selection over a listing of the containers root.

use std::ffi::{OsStr, OsString};
use std::time::SystemTime;

/// One immediate entry of the containers root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    pub name: OsString,
    pub modified: SystemTime,
}

impl ContainerEntry {
    pub fn new(name: impl Into<OsString>, modified: SystemTime) -> Self {
        Self { name: name.into(), modified }
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        has_extension(&self.name, extension)
    }
}

/// Whether an entry name ends with `extension`, compared byte-wise so
/// non-UTF-8 names still match.
pub fn has_extension(name: &OsStr, extension: &str) -> bool {
    name.as_encoded_bytes().ends_with(extension.as_bytes())
}

/// Pick the most recently modified entry whose name ends with `extension`.
///
/// Entries are stable-sorted by modification time, so on equal timestamps
/// the one listed later wins. Listing order is filesystem-dependent.
pub fn select_latest<'a>(
    entries: &'a [ContainerEntry],
    extension: &str,
) -> Option<&'a ContainerEntry> {
    let mut containers: Vec<&ContainerEntry> =
        entries.iter().filter(|entry| entry.has_extension(extension)).collect();
    containers.sort_by_key(|entry| entry.modified);
    containers.pop()
}
