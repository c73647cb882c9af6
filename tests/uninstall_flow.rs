//! End to end uninstall against a scratch filesystem layout

use pharos_uninstall::paths::{InstallPaths, POPUP_SERVER_FILE_NAME};
use pharos_uninstall::printers::{PrinterDirectory, PrinterSettings, DEVICE_URI_KEY};
use pharos_uninstall::process::ProcessManager;
use pharos_uninstall::uninstaller::{StepResult, Uninstaller};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

struct FakePrinters(BTreeMap<String, PrinterSettings>);

impl PrinterDirectory for FakePrinters {
    fn list_printers(&self) -> anyhow::Result<BTreeMap<String, PrinterSettings>> {
        Ok(self.0.clone())
    }

    fn delete_printer(&self, _name: &str) -> bool {
        true
    }
}

struct FakeProcesses {
    running: Vec<&'static str>,
    killed: RefCell<Vec<String>>,
}

impl ProcessManager for FakeProcesses {
    fn is_running(&self, name: &str) -> bool {
        self.running.contains(&name)
    }

    fn kill(&self, name: &str) -> bool {
        self.killed.borrow_mut().push(name.to_string());
        true
    }
}

fn pharos_printer(uri: &str) -> PrinterSettings {
    let mut settings = PrinterSettings::new();
    settings.insert(DEVICE_URI_KEY.to_string(), uri.to_string());
    settings
}

fn write_empty(file: &Path) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, "").unwrap();
}

#[test]
fn full_uninstall_cleans_the_whole_installation() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let paths = InstallPaths {
        backend_file: root.join("usr/lib/cups/backend/pharos"),
        popup_executable: root.join("usr/local/bin/pharospopup"),
        config_file: root.join("usr/local/etc/pharos.conf"),
        homes_dir: root.join("home"),
        root_home: root.join("root"),
        skel_dir: root.join("etc/skel"),
        log_dir: root.join("var/log/pharos"),
    };
    write_empty(&paths.backend_file);
    write_empty(&paths.popup_executable);
    write_empty(&paths.config_file);
    for home in [
        paths.homes_dir.join("alice"),
        paths.homes_dir.join("bob"),
        paths.root_home.clone(),
        paths.skel_dir.clone(),
    ] {
        write_empty(&InstallPaths::autostart_entry(&home));
    }

    let printers = FakePrinters(BTreeMap::from([(
        "Library_1".to_string(),
        pharos_printer("pharos://printhost/Library_1"),
    )]));
    let processes = FakeProcesses {
        running: vec![POPUP_SERVER_FILE_NAME, "gnome"],
        killed: RefCell::new(Vec::new()),
    };

    let report = Uninstaller::new(&printers, &processes, paths.clone()).uninstall();

    assert_eq!(report.printers, StepResult::Done);
    assert_eq!(report.backend, StepResult::Done);
    assert_eq!(report.popup_server, StepResult::Done);
    assert_eq!(report.autostart, StepResult::Done);
    assert_eq!(report.log_files, StepResult::Skipped);

    assert_eq!(
        *processes.killed.borrow(),
        vec![POPUP_SERVER_FILE_NAME.to_string()]
    );
    assert!(!paths.backend_file.exists());
    assert!(!paths.popup_executable.exists());
    assert!(!paths.config_file.exists());
    for home in [
        paths.homes_dir.join("alice"),
        paths.homes_dir.join("bob"),
        paths.root_home.clone(),
        paths.skel_dir.clone(),
    ] {
        assert!(!InstallPaths::autostart_entry(&home).exists());
    }

    let json = serde_json::to_string_pretty(&report).unwrap();
    assert!(json.contains("\"printers\": \"done\""));
}
