//! Pure parse for the optional `config.toml` override file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

/// Values read from `config.toml`. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub containers_root: Option<PathBuf>,
    pub container_extension: Option<String>,
    pub container_documents_subpath: Option<PathBuf>,
    pub desktop_data_root: Option<PathBuf>,
    pub desktop_documents_dir: Option<String>,
    pub backup_dir_name: Option<String>,
}

/// Parse override values from TOML content.
pub fn parse_overrides(content: &str) -> Result<ConfigOverrides, AppError> {
    let overrides: ConfigOverrides = toml::from_str(content)?;
    Ok(overrides)
}
