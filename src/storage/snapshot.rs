use std::path::PathBuf;
use std::time::SystemTime;

pub struct Snapshot {
    pub name: String,
    pub path: PathBuf,
    pub modify_time: SystemTime,
}

impl Snapshot {
    pub fn new(name: String, path: PathBuf, modify_time: SystemTime) -> Snapshot {
        Snapshot {name, path, modify_time}
    }
}
