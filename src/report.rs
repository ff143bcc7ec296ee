//! JSON reports of discovered installations.
//!
//! A report is a snapshot of one scan: when it ran, on which OS, and every
//! installation found. It is written as `daw_installations.json`.

use crate::{DawApp, OperatingSystem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_FILE_NAME: &str = "daw_installations.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationReport {
    /// RFC 3339 timestamp in local time.
    pub generated_at: String,
    pub host_os: Option<OperatingSystem>,
    pub installations: Vec<DawApp>,
}

impl InstallationReport {
    pub fn new(installations: Vec<DawApp>) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            host_os: OperatingSystem::current(),
            installations,
        }
    }
}

/// Write a report for `installations` into `dir`, creating the directory if needed.
/// Returns the path of the written file.
pub fn write_report(installations: &[DawApp], dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).context(format!("Failed to create report directory: {:?}", dir))?;

    let report = InstallationReport::new(installations.to_vec());
    let report_path = dir.join(REPORT_FILE_NAME);
    let content = serde_json::to_string_pretty(&report)?;
    fs::write(&report_path, content).context(format!("Failed to write report: {:?}", report_path))?;

    Ok(report_path)
}

pub fn read_report(path: &Path) -> Result<InstallationReport> {
    let content = fs::read_to_string(path).context(format!("Failed to read report: {:?}", path))?;
    serde_json::from_str(&content).context(format!("Malformed report: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn report_keeps_installations() {
        let dir = tempdir().unwrap();
        let apps = vec![
            DawApp::new("Cubase", dir.path().join("Cubase 12"), 12),
            DawApp::new("Cubase", dir.path().join("Cubase 13"), 13),
        ];

        let path = write_report(&apps, &dir.path().join("reports")).unwrap();
        assert_eq!(path.file_name().unwrap(), REPORT_FILE_NAME);

        let report = read_report(&path).unwrap();
        assert_eq!(report.installations, apps);
        assert_eq!(report.host_os, OperatingSystem::current());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }

    #[test]
    fn malformed_report_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = read_report(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed report"));
    }
}
