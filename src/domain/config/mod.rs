//! Path configuration for a sync run.

pub mod parse;
pub mod paths;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

pub use parse::{ConfigOverrides, parse_overrides};

/// Locations the locator and the sync drivers operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory holding exported `.xcappdata` containers.
    pub containers_root: PathBuf,
    /// Name suffix a containers-root entry must carry to be considered.
    pub container_extension: String,
    /// Documents directory inside a container, relative to its root.
    pub container_documents_subpath: PathBuf,
    /// Data root of the desktop build.
    pub desktop_data_root: PathBuf,
    /// Documents directory name under `desktop_data_root`.
    pub desktop_documents_dir: String,
    /// Backup directory name under `desktop_data_root`.
    pub backup_dir_name: String,
}

impl SyncConfig {
    /// Default configuration rooted at the given home directory.
    pub fn from_home(home: &Path) -> Self {
        Self::with_roots(paths::containers_root(home), paths::desktop_data_root(home))
    }

    /// Default layout with explicit containers and desktop data roots.
    pub fn with_roots(containers_root: PathBuf, desktop_data_root: PathBuf) -> Self {
        Self {
            containers_root,
            container_extension: paths::CONTAINER_EXTENSION.to_string(),
            container_documents_subpath: PathBuf::from(paths::CONTAINER_DOCUMENTS_SUBPATH),
            desktop_data_root,
            desktop_documents_dir: paths::DESKTOP_DOCUMENTS_DIR.to_string(),
            backup_dir_name: paths::BACKUP_DIR_NAME.to_string(),
        }
    }

    /// Apply file overrides. Relative roots are resolved against `home`.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides, home: &Path) -> Self {
        if let Some(root) = overrides.containers_root {
            self.containers_root = home.join(root);
        }
        if let Some(extension) = overrides.container_extension {
            self.container_extension = extension;
        }
        if let Some(subpath) = overrides.container_documents_subpath {
            self.container_documents_subpath = subpath;
        }
        if let Some(root) = overrides.desktop_data_root {
            self.desktop_data_root = home.join(root);
        }
        if let Some(dir) = overrides.desktop_documents_dir {
            self.desktop_documents_dir = dir;
        }
        if let Some(name) = overrides.backup_dir_name {
            self.backup_dir_name = name;
        }
        self
    }

    /// Desktop documents directory.
    pub fn desktop_documents(&self) -> PathBuf {
        self.desktop_data_root.join(&self.desktop_documents_dir)
    }

    /// Desktop backup directory, overwritten on every desktop-to-mobile sync.
    pub fn desktop_backup(&self) -> PathBuf {
        self.desktop_data_root.join(&self.backup_dir_name)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.container_extension.is_empty() {
            return Err(AppError::config_error("container_extension must not be empty"));
        }
        if !is_relative_subpath(&self.container_documents_subpath) {
            return Err(AppError::config_error(format!(
                "container_documents_subpath must be a relative path inside the container: {}",
                self.container_documents_subpath.display()
            )));
        }
        ensure_single_component("desktop_documents_dir", &self.desktop_documents_dir)?;
        ensure_single_component("backup_dir_name", &self.backup_dir_name)?;
        if self.desktop_documents_dir == self.backup_dir_name {
            return Err(AppError::config_error(
                "backup_dir_name must differ from desktop_documents_dir",
            ));
        }
        Ok(())
    }
}

fn is_relative_subpath(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

fn ensure_single_component(field: &str, value: &str) -> Result<(), AppError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{field} must be a single directory name, got '{value}'"
        ))),
    }
}
