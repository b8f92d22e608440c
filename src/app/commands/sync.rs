//! The two directional sync drivers.
//!
//! Each driver is a one-shot sequence of replaces. Completed replaces stay in
//! place if a later step fails.

use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::{locate, replace};
use crate::domain::AppError;
use crate::ports::DirectoryStore;

pub use replace::Replacement;

/// Replaces performed by one sync run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub replacements: Vec<Replacement>,
}

/// Back up the desktop documents, then push them onto the latest container.
///
/// `on_replaced` is called after each replace completes.
pub fn desktop_to_mobile<S, F>(
    ctx: &AppContext<S>,
    mut on_replaced: F,
) -> Result<SyncOutcome, AppError>
where
    S: DirectoryStore,
    F: FnMut(&Replacement),
{
    let config = ctx.config();
    let desktop_documents = config.desktop_documents();
    let mut outcome = SyncOutcome::default();

    let backup = replace::execute(ctx.store(), &desktop_documents, &config.desktop_backup())?;
    on_replaced(&backup);
    outcome.replacements.push(backup);

    let container = locate::execute(ctx)?;
    debug!(container = %container.name.to_string_lossy(), "pushing desktop documents");
    let pushed = replace::execute(ctx.store(), &desktop_documents, &container.documents)?;
    on_replaced(&pushed);
    outcome.replacements.push(pushed);

    Ok(outcome)
}

/// Overwrite the desktop documents with the latest container's documents.
///
/// No backup is taken in this direction.
pub fn mobile_to_desktop<S, F>(
    ctx: &AppContext<S>,
    mut on_replaced: F,
) -> Result<SyncOutcome, AppError>
where
    S: DirectoryStore,
    F: FnMut(&Replacement),
{
    let container = locate::execute(ctx)?;
    debug!(container = %container.name.to_string_lossy(), "pulling container documents");

    let pulled =
        replace::execute(ctx.store(), &container.documents, &ctx.config().desktop_documents())?;
    on_replaced(&pulled);

    Ok(SyncOutcome { replacements: vec![pulled] })
}
