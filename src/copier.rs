use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::core::EmptyResult;

/// The actual file transfer is delegated to an external copy mechanism. The coordinator owns
/// nothing of its semantics - only the success/failure decision.
pub trait Copier {
    fn copy(&self, source: &Path, destination: &Path) -> EmptyResult;
}

pub struct ScriptCopier {
    script: PathBuf,
}

impl ScriptCopier {
    pub fn new(script: &Path) -> ScriptCopier {
        ScriptCopier {script: script.to_owned()}
    }
}

impl Copier for ScriptCopier {
    fn copy(&self, source: &Path, destination: &Path) -> EmptyResult {
        if !self.script.is_file() {
            return Err!("Copy script not found: {:?}", self.script);
        }

        debug!("Running {:?} {:?} {:?}...", self.script, source, destination);

        let status = Command::new(&self.script).arg(source).arg(destination).status()
            .map_err(|e| format!(
                "Failed to copy files to {:?}: unable to execute {:?}: {}",
                destination, self.script, e))?;

        if !status.success() {
            return match status.code() {
                Some(code) => Err!(
                    "Failed to copy files to {:?}: the copy script exited with code {}",
                    destination, code),
                None => match status.signal() {
                    Some(signal) => Err!(
                        "Failed to copy files to {:?}: the copy script has been terminated by signal {}",
                        destination, signal),
                    None => Err!(
                        "Failed to copy files to {:?}: the copy script has terminated abnormally",
                        destination),
                },
            };
        }

        Ok(())
    }
}
