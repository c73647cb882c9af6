//! File removal with explicit outcomes

use std::io;
use std::path::Path;

/// Outcome of a single file removal attempt. A file that was already gone
/// counts as success; how each outcome is logged is up to the call site.
#[derive(Debug)]
pub enum Removal {
    Removed,
    AlreadyAbsent,
    Failed(io::Error),
}

impl Removal {
    pub fn is_success(&self) -> bool {
        !matches!(self, Removal::Failed(_))
    }
}

pub fn remove_file_if_exists<P: AsRef<Path>>(p: P) -> Removal {
    let path = p.as_ref();
    if !path.is_file() {
        return Removal::AlreadyAbsent;
    }
    match std::fs::remove_file(path) {
        Ok(()) => Removal::Removed,
        Err(e) => Removal::Failed(e),
    }
}
