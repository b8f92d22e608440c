//! CLI Adapter for the two sync entry points.

use clap::Parser;

use crate::app::api::{self, SyncOutcome};
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sync-desktop-to-mobile")]
#[command(version)]
#[command(
    about = "Back up the macOS Documents directory, then copy it into the latest iOS container",
    long_about = None
)]
struct DesktopToMobileCli {}

#[derive(Parser)]
#[command(name = "sync-mobile-to-desktop")]
#[command(version)]
#[command(
    about = "Replace the macOS Documents directory with the latest iOS container's Documents",
    long_about = None
)]
struct MobileToDesktopCli {}

/// Entry point for `sync-desktop-to-mobile`.
pub fn run_desktop_to_mobile() {
    DesktopToMobileCli::parse();
    logging::init_logging();
    exit_on_error(api::sync_desktop_to_mobile());
}

/// Entry point for `sync-mobile-to-desktop`.
pub fn run_mobile_to_desktop() {
    MobileToDesktopCli::parse();
    logging::init_logging();
    exit_on_error(api::sync_mobile_to_desktop());
}

fn exit_on_error(result: Result<SyncOutcome, AppError>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
