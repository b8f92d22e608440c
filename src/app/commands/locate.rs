//! Resolve the documents directory of the most recently modified container.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, ContainerEntry, has_extension, select_latest};
use crate::ports::DirectoryStore;

/// The container chosen for a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestContainer {
    /// Entry name under the containers root.
    pub name: OsString,
    /// Container modification time.
    pub modified: SystemTime,
    /// Documents directory inside the container.
    pub documents: PathBuf,
}

pub fn execute<S: DirectoryStore>(ctx: &AppContext<S>) -> Result<LatestContainer, AppError> {
    let config = ctx.config();
    let root = &config.containers_root;

    let mut candidates = Vec::new();
    for name in ctx.store().list_names(root)? {
        if !has_extension(&name, &config.container_extension) {
            continue;
        }
        let modified = ctx.store().modified(&root.join(&name))?;
        candidates.push(ContainerEntry::new(name, modified));
    }
    debug!(root = %root.display(), containers = candidates.len(), "scanned containers root");

    let latest = select_latest(&candidates, &config.container_extension)
        .ok_or_else(|| AppError::NoContainersFound { root: root.clone() })?;

    let documents = root.join(&latest.name).join(&config.container_documents_subpath);
    debug!(
        container = %latest.name.to_string_lossy(),
        modified = %DateTime::<Local>::from(latest.modified).format("%Y-%m-%d %H:%M:%S"),
        "selected latest container"
    );

    Ok(LatestContainer { name: latest.name.clone(), modified: latest.modified, documents })
}
