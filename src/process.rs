//! Process lookup and termination via the procps command line tools

use std::process::{Command, Stdio};

/// Seam over process enumeration and termination
pub trait ProcessManager {
    fn is_running(&self, name: &str) -> bool;
    fn kill(&self, name: &str) -> bool;
}

#[derive(Default)]
pub struct ProcTools;

impl ProcTools {
    pub fn new() -> Self {
        ProcTools
    }

    pub fn available(&self) -> bool {
        let probe = |tool: &str| {
            Command::new(tool)
                .arg("--version")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .is_ok()
        };
        probe("pgrep") && probe("killall")
    }
}

impl ProcessManager for ProcTools {
    fn is_running(&self, name: &str) -> bool {
        // -f matches against the full command line, which also catches
        // session processes like gnome-shell when probing for "gnome"
        Command::new("pgrep")
            .arg("-f")
            .arg(name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn kill(&self, name: &str) -> bool {
        match Command::new("killall")
            .arg(name)
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => status.success(),
            Err(e) => {
                log::error!("Failed to run killall: {}", e);
                false
            }
        }
    }
}
