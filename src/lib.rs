pub mod common;
pub mod fsutil;
pub mod paths;
pub mod printers;
pub mod process;
pub mod session;
pub mod uninstaller;
