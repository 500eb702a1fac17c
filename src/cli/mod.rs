mod parser;

use std::path::PathBuf;

pub use parser::{Parser, GlobalOptions};

pub struct Command {
    pub source_path: PathBuf,
    pub backup_root: PathBuf,
    pub copy_script: PathBuf,
    pub max_backups: usize,
}
