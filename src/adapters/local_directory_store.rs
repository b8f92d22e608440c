use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::DirectoryStore;

/// `DirectoryStore` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirectoryStore;

impl LocalDirectoryStore {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryStore for LocalDirectoryStore {
    fn list_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AppError> {
        Ok(fs::metadata(path)?.modified()?)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_dir_all(path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed directory tree");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError> {
        if !fs::metadata(source)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", source.display()),
            )
            .into());
        }

        let mut files = 0u64;
        for entry in WalkDir::new(source).follow_links(false).follow_root_links(true) {
            let entry = entry.map_err(io::Error::from)?;
            // The root may be a symlink; walkdir follows it, so treat it as the directory.
            if entry.depth() == 0 {
                fs::create_dir_all(target)?;
                continue;
            }
            let relative = entry.path().strip_prefix(source).map_err(io::Error::other)?;
            let destination = target.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                fs::create_dir_all(&destination)?;
            } else if file_type.is_symlink() {
                copy_symlink(entry.path(), &destination)?;
                files += 1;
            } else {
                fs::copy(entry.path(), &destination)?;
                files += 1;
            }
        }

        debug!(
            source = %source.display(),
            target = %target.display(),
            files,
            "copied directory tree"
        );
        Ok(())
    }
}

#[cfg(unix)]
fn copy_symlink(link: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(link)?, destination)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, destination: &Path) -> io::Result<()> {
    fs::copy(link, destination).map(|_| ())
}
