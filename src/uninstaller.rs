//! Sequences the uninstall steps and aggregates their outcomes

use crate::fsutil::{remove_file_if_exists, Removal};
use crate::paths::{InstallPaths, POPUP_SERVER_FILE_NAME, PROGRAM_LOG_FILES};
use crate::printers::{is_pharos_uri, PrinterDirectory, DEVICE_URI_KEY};
use crate::process::ProcessManager;
use crate::session::{
    detect_session, remove_gnome_autostart_entries, remove_kde_autostart_entries, SessionKind,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepResult {
    Done,
    Failed,
    Skipped,
}

impl StepResult {
    fn from_bool(ok: bool) -> Self {
        if ok {
            StepResult::Done
        } else {
            StepResult::Failed
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UninstallReport {
    pub printers: StepResult,
    pub backend: StepResult,
    pub popup_server: StepResult,
    pub autostart: StepResult,
    pub log_files: StepResult,
}

pub struct Uninstaller<'a> {
    printers: &'a dyn PrinterDirectory,
    processes: &'a dyn ProcessManager,
    paths: InstallPaths,
}

impl<'a> Uninstaller<'a> {
    pub fn new(
        printers: &'a dyn PrinterDirectory,
        processes: &'a dyn ProcessManager,
        paths: InstallPaths,
    ) -> Self {
        Self {
            printers,
            processes,
            paths,
        }
    }

    /// Runs every step in a fixed order, logging each outcome. Steps never
    /// propagate errors; partial failure is visible only in the report and
    /// the log stream.
    pub fn uninstall(&self) -> UninstallReport {
        log::info!("Beginning pharos uninstallation");

        let printers_deleted = self.remove_pharos_printers();
        let backend = if printers_deleted {
            log::info!("All pharos printers have been deleted, removing the CUPS backend");
            StepResult::from_bool(self.remove_backend())
        } else {
            // Deleting the backend would break any queues that are left
            log::warn!("Not all pharos printers could be deleted, leaving the CUPS backend in place");
            StepResult::Skipped
        };

        let popup_server = StepResult::from_bool(self.remove_popup_server());
        let autostart = StepResult::from_bool(self.remove_startup_entries());
        let log_files = self.remove_log_files();

        log::info!("Completed pharos uninstallation");
        UninstallReport {
            printers: StepResult::from_bool(printers_deleted),
            backend,
            popup_server,
            autostart,
            log_files,
        }
    }

    /// Delete every print queue whose device URI uses the pharos scheme.
    /// True only when at least one queue matched and every deletion worked.
    fn remove_pharos_printers(&self) -> bool {
        log::info!("Uninstalling all pharos printers");
        let all_printers = match self.printers.list_printers() {
            Ok(printers) => printers,
            Err(e) => {
                log::error!("Unable to query installed printers: {:#}", e);
                return false;
            }
        };

        let mut matched = Vec::new();
        for (name, settings) in &all_printers {
            match settings.get(DEVICE_URI_KEY) {
                Some(uri) if is_pharos_uri(uri) => {
                    log::info!("Printer {} ({}) is a pharos printer", name, uri);
                    matched.push(name.as_str());
                }
                Some(uri) => {
                    log::debug!("Printer {} ({}) is not a pharos printer", name, uri);
                }
                None => {
                    log::warn!("Could not find device-uri in settings of printer {}", name);
                }
            }
        }

        if matched.is_empty() {
            log::warn!("There are no pharos printers installed on the system");
            return false;
        }

        log::info!("There are {} pharos printer(s) installed", matched.len());
        let mut all_deleted = true;
        for name in matched {
            if self.printers.delete_printer(name) {
                log::info!("Printer {} successfully deleted", name);
            } else {
                log::error!("Could not delete printer {}", name);
                all_deleted = false;
            }
        }
        all_deleted
    }

    fn remove_backend(&self) -> bool {
        let backend = &self.paths.backend_file;
        match remove_file_if_exists(backend) {
            Removal::Removed => {
                log::info!("Removed backend file {}", backend.display());
                true
            }
            Removal::AlreadyAbsent => {
                log::warn!("Backend file {} was already removed", backend.display());
                true
            }
            Removal::Failed(e) => {
                log::error!("Could not remove backend file {}: {}", backend.display(), e);
                false
            }
        }
    }

    /// Stop the popup server, then remove its executable and config file.
    /// File removal is skipped entirely when a running popup server cannot
    /// be terminated; the two deletions are otherwise independent.
    fn remove_popup_server(&self) -> bool {
        log::info!("Uninstalling the pharos popup server");
        if self.processes.is_running(POPUP_SERVER_FILE_NAME) {
            log::info!("Popup server is running, trying to stop it");
            if self.processes.kill(POPUP_SERVER_FILE_NAME) {
                log::info!("Popup server was successfully terminated");
            } else {
                log::error!(
                    "Popup server could not be terminated, popup server files will not be removed"
                );
                return false;
            }
        } else {
            log::info!("Popup server is not running");
        }

        let mut removed_all = true;
        let files = [
            ("popup server executable", &self.paths.popup_executable),
            ("config file", &self.paths.config_file),
        ];
        for (what, file) in files {
            match remove_file_if_exists(file) {
                Removal::Removed => {
                    log::info!("Removed {} {}", what, file.display());
                }
                Removal::AlreadyAbsent => {
                    log::warn!("The {} {} was already removed", what, file.display());
                }
                Removal::Failed(e) => {
                    log::error!("Could not remove {} {}: {}", what, file.display(), e);
                    removed_all = false;
                }
            }
        }
        removed_all
    }

    fn remove_startup_entries(&self) -> bool {
        log::info!("Removing session manager startup entries for the popup server");
        match detect_session(self.processes) {
            SessionKind::Gnome => {
                log::info!("Detected a GNOME session");
                remove_gnome_autostart_entries(&self.paths)
            }
            SessionKind::Kde => {
                log::info!("Detected a KDE session");
                remove_kde_autostart_entries()
            }
            SessionKind::Unknown => {
                log::warn!(
                    "Desktop session was not recognized; use your session manager to remove the startup entry for {}",
                    self.paths.popup_executable.display()
                );
                false
            }
        }
    }

    // TODO: delete PROGRAM_LOG_FILES from the log directory
    fn remove_log_files(&self) -> StepResult {
        log::info!(
            "Log files {:?} under {} are left in place",
            PROGRAM_LOG_FILES,
            self.paths.log_dir.display()
        );
        StepResult::Skipped
    }
}
