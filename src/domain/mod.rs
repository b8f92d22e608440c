pub mod config;
pub mod container;
pub mod error;

pub use config::SyncConfig;
pub use container::{ContainerEntry, has_extension, select_latest};
pub use error::AppError;
