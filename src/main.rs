//! Entry point for the Pharos remote printing uninstaller

use clap::Parser;
use pharos_uninstall::common::{install_logger, APP_NAME};
use pharos_uninstall::paths::InstallPaths;
use pharos_uninstall::printers::CupsClient;
use pharos_uninstall::process::ProcTools;
use pharos_uninstall::uninstaller::Uninstaller;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
    /// Print the uninstall report as JSON on completion
    #[arg(long)]
    json: bool,
}

fn run(args: Args) {
    log::info!(
        "Starting {}, version: {}",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let printers = CupsClient::new();
    let processes = ProcTools::new();
    if !printers.available() {
        log::error!("The CUPS command line tools (lpstat/lpadmin) are not available");
        return;
    }
    if !processes.available() {
        log::error!("The process tools (pgrep/killall) are not available");
        return;
    }

    let uninstaller = Uninstaller::new(&printers, &processes, InstallPaths::system());
    let report = uninstaller.uninstall();
    if args.json {
        let pretty = serde_json::to_string_pretty(&report).unwrap();
        println!("{}", pretty);
    }
}

fn main() {
    let args: Args = Args::parse();

    if let Err(e) = install_logger(args.debug) {
        eprintln!("Unable to install logger: {:#}", e);
        std::process::exit(1);
    }

    // The exit code stays 0 even on partial failure so packaged removal
    // scripts are never aborted; failures are reported via the log stream
    run(args);
}
