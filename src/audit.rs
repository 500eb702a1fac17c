use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use log::{error, info};

use crate::config::Config;
use crate::core::EmptyResult;
use crate::storage::Snapshot;
use crate::util;

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CHANGELOG_DATE_FORMAT: &str = "%d-%b-%Y";

/// Append-only audit trail of the backup process: a free-text operational log plus a structured
/// changelog of created/deleted backups. Every message is emitted to the operator before it's
/// appended to the log file - an unwritable log file never swallows it.
pub struct AuditLog {
    log_path: PathBuf,
    changelog_path: PathBuf,
}

impl AuditLog {
    pub fn new(config: &Config) -> AuditLog {
        AuditLog {
            log_path: config.log_path.clone(),
            changelog_path: config.changelog_path.clone(),
        }
    }

    pub fn info(&self, message: &str) -> EmptyResult {
        info!("{}", message);
        self.append(message)
    }

    pub fn error(&self, message: &str) -> EmptyResult {
        error!("{}", message);
        self.append(&format!("ERROR: {}", message))
    }

    pub fn add_changelog(&self, created: &Snapshot, deleted: &[Snapshot]) -> EmptyResult {
        let date = util::timestamp(CHANGELOG_DATE_FORMAT);

        let mut entries = format!("[CREATED] {} - {}\n", date, created.name);
        for snapshot in deleted {
            entries += &format!("[DELETED] {} - {}\n", date, snapshot.name);
        }

        let mut file = OpenOptions::new().create(true).append(true)
            .open(&self.changelog_path).map_err(|e| format!(
                "Unable to open {:?}: {}", self.changelog_path, e))?;

        Ok(file.write_all(entries.as_bytes()).map_err(|e| format!(
            "Unable to write to {:?}: {}", self.changelog_path, e))?)
    }

    fn append(&self, message: &str) -> EmptyResult {
        let mut file = OpenOptions::new().create(true).append(true)
            .open(&self.log_path).map_err(|e| format!(
                "Unable to open {:?}: {}", self.log_path, e))?;

        Ok(writeln!(file, "[{}] {}", util::timestamp(LOG_TIME_FORMAT), message).map_err(|e| format!(
            "Unable to write to {:?}: {}", self.log_path, e))?)
    }
}
