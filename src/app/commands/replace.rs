//! Delete-then-copy replacement of one directory tree by another.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::ports::DirectoryStore;

/// A completed replace of `target` by a copy of `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Replaced {} with {}", self.target.display(), self.source.display())
    }
}

/// Remove `target` (if present) and copy the tree at `source` in its place.
///
/// There is no rollback: a failed copy leaves `target` partially populated.
pub fn execute<S: DirectoryStore>(
    store: &S,
    source: &Path,
    target: &Path,
) -> Result<Replacement, AppError> {
    store.remove_dir_all(target)?;
    store.copy_dir_all(source, target)?;

    let replacement = Replacement { source: source.to_path_buf(), target: target.to_path_buf() };
    info!(source = %source.display(), target = %target.display(), "replaced directory");
    Ok(replacement)
}
