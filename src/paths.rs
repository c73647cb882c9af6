//! Fixed install locations for the Pharos client package

use std::path::{Path, PathBuf};

pub const BACKEND_FILE_NAME: &str = "pharos";
pub const POPUP_SERVER_FILE_NAME: &str = "pharospopup";
pub const CONFIG_FILE_NAME: &str = "pharos.conf";
pub const AUTOSTART_FILE_NAME: &str = "pharospopup.desktop";
pub const PROGRAM_LOG_FILES: &[&str] = &["pharos.log", "pharospopup.log"];

/// Everywhere the package puts files on disk. Constructed once per run and
/// passed down, so tests can point the whole uninstall at a scratch tree.
#[derive(Debug, Clone)]
pub struct InstallPaths {
    /// CUPS backend executable
    pub backend_file: PathBuf,
    /// Popup server executable
    pub popup_executable: PathBuf,
    /// Popup server configuration file
    pub config_file: PathBuf,
    /// Directory containing the user home directories
    pub homes_dir: PathBuf,
    /// Home directory of the root user
    pub root_home: PathBuf,
    /// Skeleton template applied to future user accounts
    pub skel_dir: PathBuf,
    /// Directory holding the package's own log files
    pub log_dir: PathBuf,
}

impl InstallPaths {
    pub fn system() -> Self {
        Self {
            backend_file: PathBuf::from("/usr/lib/cups/backend").join(BACKEND_FILE_NAME),
            popup_executable: PathBuf::from("/usr/local/bin").join(POPUP_SERVER_FILE_NAME),
            config_file: PathBuf::from("/usr/local/etc").join(CONFIG_FILE_NAME),
            homes_dir: PathBuf::from("/home"),
            root_home: PathBuf::from("/root"),
            skel_dir: PathBuf::from("/etc/skel"),
            log_dir: PathBuf::from("/var/log/pharos"),
        }
    }

    /// Autostart descriptor location within a home directory
    pub fn autostart_entry(home: &Path) -> PathBuf {
        home.join(".config/autostart").join(AUTOSTART_FILE_NAME)
    }
}
