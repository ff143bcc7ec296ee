use std::fs;

use daw_detect::registry::get_installed;
use daw_detect::report::{read_report, write_report};
use daw_detect::{DawApp, DawFamily, ScanOptions, Scanner};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn survey_and_report_round_trip() {
    let dir = tempdir().unwrap();
    let steinberg = dir.path().join("Steinberg");
    let avid = dir.path().join("Avid");
    let portable = dir.path().join("Portable");
    for path in [
        steinberg.join("Cubase 12"),
        steinberg.join("Cubase 13"),
        steinberg.join("Nuendo 12"),
        avid.join("Pro Tools 2023"),
        portable.join("Cubase 11"),
    ] {
        fs::create_dir_all(path).unwrap();
    }

    let cubase = DawFamily::new("Cubase", "Steinberg", &steinberg);
    let pro_tools = DawFamily::new("Pro Tools", "Avid", &avid);
    let scanner = Scanner::new(ScanOptions {
        extra_roots: vec![portable.clone()],
        ..ScanOptions::default()
    });

    let found = scanner.scan_all(&[&pro_tools, &cubase]).unwrap();
    let labels: Vec<_> = found.iter().map(DawApp::label).collect();
    assert_eq!(
        labels,
        vec!["Cubase 11", "Cubase 12", "Cubase 13", "Pro Tools 2023"]
    );

    let report_path = write_report(&found, dir.path()).unwrap();
    let report = read_report(&report_path).unwrap();
    assert_eq!(report.installations, found);
}

#[test]
fn default_root_scan_skips_unversioned_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("Reaper 7")).unwrap();
    fs::create_dir(dir.path().join("Reaper")).unwrap();

    let reaper = DawFamily::new("Reaper", "Cockos", dir.path());
    let found = get_installed(&reaper).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].version, 7);
    assert_eq!(found[0].path, dir.path().join("Reaper 7"));
}
