//! daw-detect
//!
//! Finds installed Digital Audio Workstations (Cubase, Pro Tools, ...) and
//! the version of each installation.
//!
//! # Modules
//!
//! ## Data Structures (`daw` module)
//! - `Daw` - A DAW product family across versions (trait)
//! - `DawFamily` - A family described by the caller (name, developer, OSes, install root)
//! - `Cubase` - Steinberg Cubase
//! - `DawApp` - One installed version (family name, path, version)
//!
//! ## Discovery (`registry` module)
//! - `get_installed()` - All installations of a family under its default root
//! - `scan_root()` - All installations of a family under a given root
//! - `extract_version()` - Version number from an installation directory name
//! - `resolve_daw()` - Look up a family by name
//!
//! ## Multi-root scans (`scanner` module)
//! - `Scanner::scan()` - Default root plus extra roots, deduplicated
//! - `Scanner::scan_all()` - Several families in one survey
//!
//! ## Reports (`report` module)
//! - `write_report()` / `read_report()` - JSON snapshot of a scan

pub mod daw;
pub mod error;
pub mod registry;
pub mod report;
pub mod scanner;

pub use daw::{Cubase, Daw, DawApp, DawFamily, OperatingSystem};
pub use error::DawError;
pub use scanner::{ScanOptions, Scanner};
