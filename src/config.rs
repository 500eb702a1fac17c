use std::env;
use std::path::PathBuf;

use crate::cli;

pub const DEFAULT_BACKUP_DIR: &str = "/tmp/backups";
pub const DEFAULT_MAX_BACKUPS: usize = 5;

const LOG_FILE_NAME: &str = "backup.log";
const CHANGELOG_FILE_NAME: &str = "CHANGELOG";

pub struct Config {
    pub source_path: PathBuf,
    pub backup_root: PathBuf,
    pub copy_script: PathBuf,
    pub max_backups: usize,

    pub log_path: PathBuf,
    pub changelog_path: PathBuf,
}

impl Config {
    // The log and changelog paths are always derived from $BACKUP_DIR, so when it diverges from
    // the backup root argument they live outside of the backup root.
    pub fn new(command: cli::Command) -> Config {
        let state_dir = env::var_os("BACKUP_DIR").map(PathBuf::from).unwrap_or_else(||
            PathBuf::from(DEFAULT_BACKUP_DIR));

        Config {
            source_path: command.source_path,
            backup_root: command.backup_root,
            copy_script: command.copy_script,
            max_backups: command.max_backups,

            log_path: state_dir.join(LOG_FILE_NAME),
            changelog_path: state_dir.join(CHANGELOG_FILE_NAME),
        }
    }
}
