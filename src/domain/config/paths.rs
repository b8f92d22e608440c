//! Default locations, relative to the invoking user's home directory.

use std::path::{Path, PathBuf};

/// Name suffix identifying exported iOS app containers.
pub const CONTAINER_EXTENSION: &str = ".xcappdata";

/// Documents directory inside a container, relative to the container root.
pub const CONTAINER_DOCUMENTS_SUBPATH: &str = "AppData/Documents";

/// Documents directory name under the desktop data root.
pub const DESKTOP_DOCUMENTS_DIR: &str = "Documents";

/// Backup directory name under the desktop data root.
pub const BACKUP_DIR_NAME: &str = "Documents Backup";

const CONTAINERS_ROOT: &str = "Documents/Programs/iOS/LoopMusicSwift/Containers";
const DESKTOP_DATA_ROOT: &str = "Library/Containers/LoopMusic.LoopMusicSwift/Data";

/// `$HOME/Documents/Programs/iOS/LoopMusicSwift/Containers`
pub fn containers_root(home: &Path) -> PathBuf {
    home.join(CONTAINERS_ROOT)
}

/// `$HOME/Library/Containers/LoopMusic.LoopMusicSwift/Data`
pub fn desktop_data_root(home: &Path) -> PathBuf {
    home.join(DESKTOP_DATA_ROOT)
}

/// `$HOME/.config/datasyncer/config.toml`
pub fn config_file(home: &Path) -> PathBuf {
    home.join(".config").join("datasyncer").join("config.toml")
}
