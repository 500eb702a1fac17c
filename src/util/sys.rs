use std::fs::File;
use std::path::Path;

use nix::errno::Errno;
use nix::fcntl::{Flock, FlockArg};

use crate::core::GenericResult;

pub fn acquire_lock(path: &Path) -> GenericResult<Flock<File>> {
    let file = File::open(path).map_err(|e| format!(
        "Unable to open {:?}: {}", path, e))?;

    let lock = Flock::lock(file, FlockArg::LockExclusiveNonblock).map_err(|(_, errno)| {
        if errno == Errno::EAGAIN {
            format!("Unable to acquire an exclusive lock on {:?}: it's already locked by another process", path)
        } else {
            format!("Unable to flock() {:?}: {}", path, errno)
        }
    })?;

    Ok(lock)
}
