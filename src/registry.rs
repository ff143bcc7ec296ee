//! Installation discovery for DAW families.
//!
//! Every supported DAW installs each major version into its own directory
//! under a common root, named after the product and its version:
//!
//! - **Windows**: `C:\Program Files\Steinberg\Cubase 12`, `...\Cubase 13`
//! - **macOS**: `/Applications/Cubase 12.app`, `/Applications/Cubase 13.app`
//!
//! Discovery is a single pass over that root. A child counts as an
//! installation when it is a directory whose name contains the family name
//! and whose stem carries a whole-number version token.

use crate::error::{DawError, Result};
use crate::{Daw, DawApp, OperatingSystem};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Gets every installed version of `daw` from its default install root.
///
/// Fails with [`DawError::UnsupportedOs`] when the family does not ship for
/// the current OS and with [`DawError::PathNotFound`] when the root is missing.
/// Returns an empty list when the root exists but holds no installations.
pub fn get_installed(daw: &dyn Daw) -> Result<Vec<DawApp>> {
    ensure_supported(daw)?;
    let root = daw.default_path()?;
    scan_root(daw, &root)
}

/// Scans one install root for installations of `daw`.
///
/// The result is sorted by version, then by path.
pub fn scan_root(daw: &dyn Daw, root: &Path) -> Result<Vec<DawApp>> {
    ensure_exists(daw, root)?;
    let entries = fs::read_dir(root).map_err(|e| DawError::io(root, e))?;

    let mut installations = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DawError::io(root, e))?;
        let path = entry.path();

        // Files never count, even when the name matches (installers, readmes)
        if !path.is_dir() {
            continue;
        }

        let Some(dir_name) = path.file_name().map(|n| n.to_string_lossy()) else {
            continue;
        };
        if !daw.matches(&dir_name) {
            continue;
        }

        // "Cubase 12.app" -> "Cubase 12"
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match extract_version(&stem) {
            Some(version) => {
                debug!(daw = daw.name(), version, path = %path.display(), "found installation");
                installations.push(DawApp::new(daw.name(), path, version));
            }
            None => {
                warn!(
                    daw = daw.name(),
                    path = %path.display(),
                    "no version in directory name, skipping"
                );
            }
        }
    }

    sort_installations(&mut installations);
    info!(
        daw = daw.name(),
        root = %root.display(),
        count = installations.len(),
        "scanned install root"
    );
    Ok(installations)
}

/// Extracts the version from a directory stem such as `Cubase Pro 13`.
///
/// Takes the first whitespace-separated token made only of ASCII digits.
/// `12.5` and `v12` are not versions.
pub fn extract_version(stem: &str) -> Option<u32> {
    stem.split_whitespace()
        .find(|token| token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// Looks up a family by exact name among `daws`.
pub fn resolve_daw<'a>(daws: &[&'a dyn Daw], name: &str) -> Result<&'a dyn Daw> {
    let mut matching = daws.iter().copied().filter(|daw| daw.name() == name);

    match (matching.next(), matching.next()) {
        (Some(daw), None) => Ok(daw),
        (Some(_), Some(_)) => Err(DawError::AmbiguousDaw(name.to_string())),
        (None, _) => Err(DawError::UnsupportedDaw(name.to_string())),
    }
}

pub(crate) fn ensure_supported(daw: &dyn Daw) -> Result<()> {
    match OperatingSystem::current() {
        Some(os) if daw.supports(os) => Ok(()),
        current => Err(DawError::UnsupportedOs {
            daw: daw.name().to_string(),
            os: current
                .map(|os| os.to_string())
                .unwrap_or_else(|| std::env::consts::OS.to_string()),
        }),
    }
}

pub(crate) fn sort_installations(installations: &mut [DawApp]) {
    installations.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then(a.version.cmp(&b.version))
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Fails unless `root` exists. Entry paths are built from `root` as given,
/// never from its canonical form.
fn ensure_exists(daw: &dyn Daw, root: &Path) -> Result<()> {
    fs::metadata(root).map(|_| ()).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DawError::PathNotFound {
            daw: daw.name().to_string(),
            path: root.to_path_buf(),
            source,
        },
        _ => DawError::io(root, source),
    })
}
