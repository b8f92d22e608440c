//! datasyncer: sync the Documents directory between an exported iOS app
//! container and the macOS build of the same app.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::*;
pub use domain::SyncConfig;
