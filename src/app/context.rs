use crate::domain::SyncConfig;
use crate::ports::DirectoryStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DirectoryStore> {
    store: S,
    config: SyncConfig,
}

impl<S: DirectoryStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, config: SyncConfig) -> Self {
        Self { store, config }
    }

    /// Get a reference to the directory store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the sync configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}
