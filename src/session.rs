//! Desktop session detection and autostart entry cleanup

use crate::fsutil::{remove_file_if_exists, Removal};
use crate::paths::InstallPaths;
use crate::process::ProcessManager;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Gnome,
    Kde,
    Unknown,
}

/// Coarse heuristic: a desktop environment counts as active when a process
/// matching its name is running
pub fn detect_session(processes: &dyn ProcessManager) -> SessionKind {
    if processes.is_running("gnome") {
        SessionKind::Gnome
    } else if processes.is_running("kde") {
        SessionKind::Kde
    } else {
        SessionKind::Unknown
    }
}

/// Delete the popup server autostart descriptor for every user home under
/// the homes directory, the root user, and the skeleton template. Each
/// attempt is independent; the result is the AND across all of them.
pub fn remove_gnome_autostart_entries(paths: &InstallPaths) -> bool {
    log::info!("Removing popup server autostart entries from GNOME sessions");
    let mut all_removed = true;

    match std::fs::read_dir(&paths.homes_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                log::debug!("Checking autostart entry for {}", entry.path().display());
                all_removed &= remove_autostart_entry(&InstallPaths::autostart_entry(&entry.path()));
            }
        }
        Err(e) => {
            log::warn!(
                "Unable to list user home directories under {}: {}",
                paths.homes_dir.display(),
                e
            );
            all_removed = false;
        }
    }

    all_removed &= remove_autostart_entry(&InstallPaths::autostart_entry(&paths.root_home));
    all_removed &= remove_autostart_entry(&InstallPaths::autostart_entry(&paths.skel_dir));
    all_removed
}

fn remove_autostart_entry(file: &Path) -> bool {
    match remove_file_if_exists(file) {
        Removal::Removed => {
            log::info!("Removed autostart entry {}", file.display());
            true
        }
        Removal::AlreadyAbsent => {
            log::debug!("No autostart entry at {}", file.display());
            true
        }
        Removal::Failed(e) => {
            log::warn!("Could not delete {}: {}", file.display(), e);
            false
        }
    }
}

/// Known gap: KDE autostart entries are never cleaned up
pub fn remove_kde_autostart_entries() -> bool {
    log::warn!("KDE session cleanup is not implemented, startup entries were left in place");
    false
}
