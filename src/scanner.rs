use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{DawError, Result};
use crate::registry::{ensure_supported, scan_root, sort_installations};
use crate::{Daw, DawApp};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Roots scanned in addition to each family's default root.
    pub extra_roots: Vec<PathBuf>,
    /// Only scan `extra_roots`.
    pub skip_default_roots: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans every configured root for installations of `daw`.
    ///
    /// The default root must exist unless `skip_default_roots` is set. Extra
    /// roots that do not exist, or are not directories, are skipped.
    pub fn scan(&self, daw: &dyn Daw) -> Result<Vec<DawApp>> {
        self.scan_roots(daw, false)
    }

    /// Collects installations of several families at once.
    ///
    /// A family that is not offered on this OS contributes nothing. A missing
    /// default root is skipped like a missing extra root, so installations
    /// under `extra_roots` are still found.
    pub fn scan_all(&self, daws: &[&dyn Daw]) -> Result<Vec<DawApp>> {
        let mut installations = Vec::new();

        for daw in daws {
            match self.scan_roots(*daw, true) {
                Ok(mut found) => installations.append(&mut found),
                Err(e @ DawError::UnsupportedOs { .. }) => {
                    debug!(daw = daw.name(), "not installed: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        sort_installations(&mut installations);
        Ok(installations)
    }

    fn scan_roots(&self, daw: &dyn Daw, allow_missing_default: bool) -> Result<Vec<DawApp>> {
        ensure_supported(daw)?;

        let mut installations = Vec::new();
        let mut seen = HashSet::new();
        let mut keep = |found: Vec<DawApp>, installations: &mut Vec<DawApp>| {
            for app in found {
                // Two spellings of one root must not report an installation twice
                let key = fs::canonicalize(&app.path).unwrap_or_else(|_| app.path.clone());
                if seen.insert(key) {
                    installations.push(app);
                }
            }
        };

        if !self.options.skip_default_roots {
            let root = daw.default_path()?;
            match scan_root(daw, &root) {
                Ok(found) => keep(found, &mut installations),
                Err(DawError::PathNotFound { path, .. }) if allow_missing_default => {
                    debug!(
                        daw = daw.name(),
                        path = %path.display(),
                        "default root missing, skipping"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        for root in &self.options.extra_roots {
            if root.exists() && !root.is_dir() {
                debug!(
                    daw = daw.name(),
                    path = %root.display(),
                    "extra root is not a directory, skipping"
                );
                continue;
            }
            match scan_root(daw, root) {
                Ok(found) => keep(found, &mut installations),
                Err(DawError::PathNotFound { path, .. }) => {
                    debug!(
                        daw = daw.name(),
                        path = %path.display(),
                        "extra root missing, skipping"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        sort_installations(&mut installations);
        Ok(installations)
    }
}
