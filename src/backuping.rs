use std::fs;

use crate::audit::AuditLog;
use crate::config::Config;
use crate::copier::Copier;
use crate::core::EmptyResult;
use crate::retention;
use crate::storage::Storage;
use crate::util::sys::acquire_lock;

pub fn backup(config: &Config, copier: &dyn Copier) -> EmptyResult {
    let audit = AuditLog::new(config);

    run(config, copier, &audit).map_err(|err| {
        let _ = audit.error(&err.to_string());
        err
    })
}

// Each step gates the next one. Copy and changelog failures abort the run; the already created
// backup folder is intentionally left in place - there is no rollback. Individual deletion
// failures during cleanup don't abort: they only shrink the changelog's deleted list.
fn run(config: &Config, copier: &dyn Copier, audit: &AuditLog) -> EmptyResult {
    fs::create_dir_all(&config.backup_root).map_err(|e| format!(
        "Failed to create backup directory {:?}: {}", config.backup_root, e))?;

    let _lock = acquire_lock(&config.backup_root)?;
    let storage = Storage::new(&config.backup_root);

    audit.info("========== Backup Process Started ==========")?;

    let snapshot = storage.create_snapshot()?;
    audit.info(&format!("Created backup folder: {}", snapshot.path.display()))?;

    copier.copy(&config.source_path, &snapshot.path)?;
    audit.info(&format!("Successfully copied files to {}", snapshot.path.display()))?;

    let deleted = retention::enforce(&storage, audit, config.max_backups)?;

    audit.add_changelog(&snapshot, &deleted).map_err(|e| format!(
        "Failed to update changelog: {}", e))?;
    audit.info(&format!("Updated changelog: {}", config.changelog_path.display()))?;

    audit.info("========== Backup Process Completed Successfully ==========")?;

    Ok(())
}
