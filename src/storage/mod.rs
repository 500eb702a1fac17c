mod snapshot;

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::core::{EmptyResult, GenericResult};
use crate::util;

pub use self::snapshot::Snapshot;

pub const SNAPSHOT_NAME_PREFIX: &str = "backup_";
const SNAPSHOT_NAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: &Path) -> Storage {
        Storage {path: path.to_owned()}
    }

    // Recreating an identically named backup within the same second is tolerated: the folder is
    // just reused.
    pub fn create_snapshot(&self) -> GenericResult<Snapshot> {
        let name = format!("{}{}", SNAPSHOT_NAME_PREFIX, util::timestamp(SNAPSHOT_NAME_TIME_FORMAT));
        let path = self.path.join(&name);

        debug!("Creating {:?}...", path);
        fs::create_dir_all(&path).map_err(|e| format!(
            "Failed to create backup folder at {:?}: {}", self.path, e))?;

        let metadata = fs::metadata(&path).map_err(|e| format!(
            "Unable to get metadata of {:?}: {}", path, e))?;

        Ok(Snapshot::new(name, path, metadata.modified()?))
    }

    /// Returns the backups under the root ordered by modification time, oldest first. The
    /// filesystem modification time is authoritative here - never the timestamp encoded in the
    /// folder name.
    pub fn list_snapshots(&self) -> GenericResult<Vec<Snapshot>> {
        lazy_static! {
            static ref SNAPSHOT_NAME_REGEX: Regex = Regex::new(r"^backup_").unwrap();
        }

        let entries = fs::read_dir(&self.path).map_err(|e| format!(
            "Unable to list {:?}: {}", self.path, e))?;

        let mut snapshots = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| format!(
                "Unable to list {:?}: {}", self.path, e))?;

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            if !SNAPSHOT_NAME_REGEX.is_match(&name) {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| format!(
                "Unable to get metadata of {:?}: {}", entry.path(), e))?;
            if !metadata.is_dir() {
                continue;
            }

            let modify_time = metadata.modified().map_err(|e| format!(
                "Unable to get modification time of {:?}: {}", entry.path(), e))?;

            snapshots.push(Snapshot::new(name, entry.path(), modify_time));
        }

        snapshots.sort_by(|a, b| a.modify_time.cmp(&b.modify_time).then_with(|| a.name.cmp(&b.name)));

        Ok(snapshots)
    }

    pub fn delete_snapshot(&self, snapshot: &Snapshot) -> EmptyResult {
        debug!("Deleting {:?}...", snapshot.path);
        Ok(fs::remove_dir_all(&snapshot.path).map_err(|e| format!(
            "Failed to delete {:?}: {}", snapshot.path, e))?)
    }
}
