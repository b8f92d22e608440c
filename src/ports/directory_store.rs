use std::ffi::OsString;
use std::path::Path;
use std::time::SystemTime;

use crate::domain::AppError;

/// Filesystem operations the container locator and directory replacer rely on.
pub trait DirectoryStore {
    /// Names of the immediate entries of `dir`, in listing order.
    fn list_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError>;

    /// Last modification time of `path`, following symlinks.
    fn modified(&self, path: &Path) -> Result<SystemTime, AppError>;

    /// Remove `path` and everything below it. No-op if the path does not exist.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Recursively copy the directory tree at `source` to `target`, creating
    /// `target` and any missing parents. `target` must not exist yet.
    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError>;
}
