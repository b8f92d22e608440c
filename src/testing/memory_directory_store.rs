use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::domain::AppError;
use crate::ports::DirectoryStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir { modified: SystemTime },
    File { content: Vec<u8> },
}

/// Mutating call recorded by `MemoryDirectoryStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Remove(PathBuf),
    Copy { source: PathBuf, target: PathBuf },
}

/// In-memory directory tree for exercising commands without touching disk.
#[derive(Default)]
pub struct MemoryDirectoryStore {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    ops: RefCell<Vec<StoreOp>>,
}

impl MemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its parents) with the given mtime in seconds.
    pub fn with_dir(mut self, path: impl AsRef<Path>, mtime_secs: u64) -> Self {
        let path = path.as_ref();
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(mtime_secs);
        let nodes = self.nodes.get_mut();
        insert_parents(nodes, path);
        nodes.insert(path.to_path_buf(), Node::Dir { modified });
        self
    }

    /// Add a file, creating parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        let nodes = self.nodes.get_mut();
        insert_parents(nodes, path);
        nodes.insert(path.to_path_buf(), Node::File { content: content.as_bytes().to_vec() });
        self
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.nodes.borrow().contains_key(path.as_ref())
    }

    /// Names of files anywhere below `dir`, relative to it, sorted.
    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = dir.as_ref();
        self.nodes
            .borrow()
            .iter()
            .filter(|(path, node)| matches!(node, Node::File { .. }) && path.starts_with(dir))
            .filter_map(|(path, _)| path.strip_prefix(dir).ok())
            .map(|relative| relative.to_string_lossy().into_owned())
            .collect()
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.borrow().clone()
    }
}

fn insert_parents(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
        if !ancestor.as_os_str().is_empty() {
            nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir { modified: SystemTime::UNIX_EPOCH });
        }
    }
}

fn not_found(path: &Path) -> AppError {
    io::Error::new(io::ErrorKind::NotFound, format!("no such path: {}", path.display())).into()
}

impl DirectoryStore for MemoryDirectoryStore {
    fn list_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        let nodes = self.nodes.borrow();
        match nodes.get(dir) {
            Some(Node::Dir { .. }) => {}
            _ => return Err(not_found(dir)),
        }
        Ok(nodes
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(OsString::from))
            .collect())
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AppError> {
        match self.nodes.borrow().get(path) {
            Some(Node::Dir { modified }) => Ok(*modified),
            Some(Node::File { .. }) => Ok(SystemTime::UNIX_EPOCH),
            None => Err(not_found(path)),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.ops.borrow_mut().push(StoreOp::Remove(path.to_path_buf()));
        self.nodes.borrow_mut().retain(|existing, _| !existing.starts_with(path));
        Ok(())
    }

    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError> {
        self.ops
            .borrow_mut()
            .push(StoreOp::Copy { source: source.to_path_buf(), target: target.to_path_buf() });

        let copied: Vec<(PathBuf, Node)> = {
            let nodes = self.nodes.borrow();
            match nodes.get(source) {
                Some(Node::Dir { .. }) => {}
                _ => return Err(not_found(source)),
            }
            nodes
                .iter()
                .filter(|(path, _)| path.starts_with(source))
                .filter_map(|(path, node)| {
                    path.strip_prefix(source).ok().map(|rel| (target.join(rel), node.clone()))
                })
                .collect()
        };

        let mut nodes = self.nodes.borrow_mut();
        insert_parents(&mut nodes, target);
        nodes.extend(copied);
        Ok(())
    }
}
