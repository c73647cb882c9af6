//! CUPS print queue enumeration and deletion

use regex::Regex;
use std::collections::BTreeMap;
use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;

pub const DEVICE_URI_KEY: &str = "device-uri";

const PHAROS_URI_PATTERN: &str = "^pharos://";

/// Per-printer settings as reported by the print spooler
pub type PrinterSettings = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum CupsError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Seam over the system print spooler
pub trait PrinterDirectory {
    fn list_printers(&self) -> anyhow::Result<BTreeMap<String, PrinterSettings>>;
    fn delete_printer(&self, name: &str) -> bool;
}

/// True when the device URI uses the pharos transport scheme.
/// The match is anchored and case-sensitive.
pub fn is_pharos_uri(uri: &str) -> bool {
    Regex::new(PHAROS_URI_PATTERN).unwrap().is_match(uri)
}

/// Talks to CUPS via the `lpstat` / `lpadmin` command line tools
#[derive(Default)]
pub struct CupsClient;

impl CupsClient {
    pub fn new() -> Self {
        CupsClient
    }

    pub fn available(&self) -> bool {
        Command::new("lpstat")
            .arg("-r")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl PrinterDirectory for CupsClient {
    fn list_printers(&self) -> anyhow::Result<BTreeMap<String, PrinterSettings>> {
        let names = Command::new("lpstat")
            .arg("-p")
            .output()
            .map_err(|source| CupsError::Spawn {
                command: "lpstat",
                source,
            })?;
        // lpstat exits non-zero when no destinations exist at all
        if !names.status.success() {
            return Ok(BTreeMap::new());
        }
        let devices = Command::new("lpstat")
            .arg("-v")
            .output()
            .map_err(|source| CupsError::Spawn {
                command: "lpstat",
                source,
            })?;

        let mut printers = parse_printer_names(&String::from_utf8_lossy(&names.stdout));
        if devices.status.success() {
            let uris = parse_device_uris(&String::from_utf8_lossy(&devices.stdout));
            for (name, uri) in uris {
                printers
                    .entry(name)
                    .or_default()
                    .insert(DEVICE_URI_KEY.to_string(), uri);
            }
        }
        Ok(printers)
    }

    fn delete_printer(&self, name: &str) -> bool {
        match Command::new("lpadmin").arg("-x").arg(name).status() {
            Ok(status) => status.success(),
            Err(e) => {
                log::error!("Failed to run lpadmin: {}", e);
                false
            }
        }
    }
}

/// Parse `lpstat -p` lines of the form `printer <name> is idle. ...`
fn parse_printer_names(stdout: &str) -> BTreeMap<String, PrinterSettings> {
    let line = Regex::new(r"^printer (\S+)").unwrap();
    stdout
        .lines()
        .filter_map(|l| line.captures(l.trim()))
        .map(|c| (c[1].to_string(), PrinterSettings::new()))
        .collect()
}

/// Parse `lpstat -v` lines of the form `device for <name>: <uri>`
fn parse_device_uris(stdout: &str) -> Vec<(String, String)> {
    let line = Regex::new(r"^device for ([^:\s]+): (.+)$").unwrap();
    stdout
        .lines()
        .filter_map(|l| line.captures(l.trim()))
        .map(|c| (c[1].to_string(), c[2].trim().to_string()))
        .collect()
}
