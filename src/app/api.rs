//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::path::Path;

use crate::adapters::LocalDirectoryStore;
use crate::app::{
    AppContext,
    commands::{locate, replace, sync},
    config::load_config,
};
use crate::domain::SyncConfig;

pub use crate::app::commands::locate::LatestContainer;
pub use crate::app::commands::replace::Replacement;
pub use crate::app::commands::sync::SyncOutcome;
pub use crate::domain::AppError;

fn create_context(config: SyncConfig) -> AppContext<LocalDirectoryStore> {
    AppContext::new(LocalDirectoryStore::new(), config)
}

fn report(replacement: &Replacement) {
    println!("{replacement}");
}

// =============================================================================
// Sync Drivers
// =============================================================================

/// Back up the desktop documents and push them onto the latest iOS container,
/// using the invoking user's configuration.
pub fn sync_desktop_to_mobile() -> Result<SyncOutcome, AppError> {
    sync_desktop_to_mobile_with(load_config()?)
}

/// Desktop-to-mobile sync with an explicit configuration.
pub fn sync_desktop_to_mobile_with(config: SyncConfig) -> Result<SyncOutcome, AppError> {
    config.validate()?;
    let ctx = create_context(config);
    sync::desktop_to_mobile(&ctx, report)
}

/// Replace the desktop documents with the latest iOS container's documents,
/// using the invoking user's configuration. No backup is taken.
pub fn sync_mobile_to_desktop() -> Result<SyncOutcome, AppError> {
    sync_mobile_to_desktop_with(load_config()?)
}

/// Mobile-to-desktop sync with an explicit configuration.
pub fn sync_mobile_to_desktop_with(config: SyncConfig) -> Result<SyncOutcome, AppError> {
    config.validate()?;
    let ctx = create_context(config);
    sync::mobile_to_desktop(&ctx, report)
}

// =============================================================================
// Building Blocks
// =============================================================================

/// Locate the most recently modified container under `config.containers_root`.
pub fn latest_container(config: SyncConfig) -> Result<LatestContainer, AppError> {
    let ctx = create_context(config);
    locate::execute(&ctx)
}

/// Replace `target` with a recursive copy of `source`.
pub fn replace_directory(source: &Path, target: &Path) -> Result<Replacement, AppError> {
    replace::execute(&LocalDirectoryStore::new(), source, target)
}
