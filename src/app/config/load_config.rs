//! Sync configuration loading from `$HOME`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::config::{self, SyncConfig};
use crate::domain::AppError;

/// Load configuration for the invoking user.
pub fn load_config() -> Result<SyncConfig, AppError> {
    let home = std::env::var("HOME")
        .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
    load_config_from_home(&PathBuf::from(home))
}

/// Build defaults under `home` and apply `~/.config/datasyncer/config.toml` when present.
pub fn load_config_from_home(home: &Path) -> Result<SyncConfig, AppError> {
    let mut sync_config = SyncConfig::from_home(home);

    let config_path = config::paths::config_file(home);
    if config_path.exists() {
        debug!(path = %config_path.display(), "applying config overrides");
        let content = fs::read_to_string(&config_path)?;
        let overrides = config::parse_overrides(&content)?;
        sync_config = sync_config.apply_overrides(overrides, home);
    }

    sync_config.validate()?;
    Ok(sync_config)
}
