use crate::audit::AuditLog;
use crate::core::GenericResult;
use crate::storage::{Snapshot, Storage};

/// Deletes the oldest backups exceeding the configured limit and returns the successfully deleted
/// ones, oldest first. A failure to delete an individual backup is logged and the backup is left
/// out of the result - the rest are still processed.
pub fn enforce(storage: &Storage, audit: &AuditLog, max_backups: usize) -> GenericResult<Vec<Snapshot>> {
    let snapshots = storage.list_snapshots()?;

    if snapshots.len() <= max_backups {
        audit.info(&format!(
            "Backup count ({}) within limit ({}). No cleanup needed.",
            snapshots.len(), max_backups))?;
        return Ok(Vec::new());
    }

    let excess = snapshots.len() - max_backups;
    let mut deleted = Vec::with_capacity(excess);

    for snapshot in snapshots.into_iter().take(excess) {
        match storage.delete_snapshot(&snapshot) {
            Ok(()) => {
                audit.info(&format!("Deleted old backup folder: {}", snapshot.path.display()))?;
                deleted.push(snapshot);
            },
            Err(err) => audit.error(&err.to_string())?,
        }
    }

    Ok(deleted)
}
