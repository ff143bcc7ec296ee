use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    pub const ALL: [OperatingSystem; 3] = [
        OperatingSystem::Windows,
        OperatingSystem::MacOs,
        OperatingSystem::Linux,
    ];

    /// The operating system this binary was built for, if it is one we know about.
    pub fn current() -> Option<OperatingSystem> {
        match std::env::consts::OS {
            "windows" => Some(OperatingSystem::Windows),
            "macos" => Some(OperatingSystem::MacOs),
            "linux" => Some(OperatingSystem::Linux),
            _ => None,
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOs => "macOS",
            OperatingSystem::Linux => "Linux",
        };
        f.write_str(name)
    }
}

/// A DAW product family across all of its versions (Cubase, Pro Tools, ...).
///
/// Implementors describe where the family installs itself and how its
/// installation directories are named. Discovery lives in [`crate::registry`].
pub trait Daw {
    fn name(&self) -> &str;

    fn developer(&self) -> &str;

    fn operating_systems(&self) -> &[OperatingSystem];

    /// Directory holding one subdirectory per installed version on the current OS.
    fn default_path(&self) -> Result<PathBuf>;

    fn supports(&self, os: OperatingSystem) -> bool {
        self.operating_systems().contains(&os)
    }

    /// Whether a directory name belongs to this family. Case-sensitive.
    fn matches(&self, dir_name: &str) -> bool {
        dir_name.contains(self.name())
    }
}

/// A DAW family described entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DawFamily {
    pub name: String,
    pub developer: String,
    pub operating_systems: Vec<OperatingSystem>,
    pub install_root: PathBuf,
}

impl DawFamily {
    pub fn new(
        name: impl Into<String>,
        developer: impl Into<String>,
        install_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            developer: developer.into(),
            operating_systems: OperatingSystem::ALL.to_vec(),
            install_root: install_root.into(),
        }
    }

    pub fn with_operating_systems(mut self, operating_systems: &[OperatingSystem]) -> Self {
        self.operating_systems = operating_systems.to_vec();
        self
    }
}

impl Daw for DawFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn developer(&self) -> &str {
        &self.developer
    }

    fn operating_systems(&self) -> &[OperatingSystem] {
        &self.operating_systems
    }

    fn default_path(&self) -> Result<PathBuf> {
        Ok(self.install_root.clone())
    }
}

/// Steinberg Cubase. Each major version installs into its own `Cubase NN` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cubase;

impl Daw for Cubase {
    fn name(&self) -> &str {
        "Cubase"
    }

    fn developer(&self) -> &str {
        "Steinberg"
    }

    fn operating_systems(&self) -> &[OperatingSystem] {
        &[OperatingSystem::Windows, OperatingSystem::MacOs]
    }

    fn default_path(&self) -> Result<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            Ok(PathBuf::from(r"C:\Program Files\Steinberg"))
        }

        // Bundles such as "Cubase 13.app"
        #[cfg(target_os = "macos")]
        {
            Ok(PathBuf::from("/Applications"))
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Err(crate::error::DawError::UnsupportedOs {
                daw: self.name().to_string(),
                os: std::env::consts::OS.to_string(),
            })
        }
    }
}

/// One installed version of a DAW, e.g. Cubase 12 next to Cubase 13.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DawApp {
    pub name: String,
    pub path: PathBuf,
    pub version: u32,
}

impl DawApp {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, version: u32) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version,
        }
    }

    /// Name and version as the vendor writes it, e.g. `Cubase 12`.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

impl fmt::Display for DawApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn family_matches_by_substring() {
        let family = DawFamily::new("Cubase", "Steinberg", "/opt/daws");
        assert!(family.matches("Cubase 12"));
        assert!(family.matches("Steinberg Cubase Pro 13"));
        assert!(!family.matches("cubase 12"));
        assert!(!family.matches("Nuendo 12"));
    }

    #[test]
    fn family_supports_every_os_by_default() {
        let family = DawFamily::new("Reaper", "Cockos", "/opt/reaper");
        for os in OperatingSystem::ALL {
            assert!(family.supports(os));
        }

        let family = family.with_operating_systems(&[OperatingSystem::Linux]);
        assert!(family.supports(OperatingSystem::Linux));
        assert!(!family.supports(OperatingSystem::Windows));
    }

    #[test]
    fn cubase_is_not_offered_on_linux() {
        assert!(!Cubase.supports(OperatingSystem::Linux));
        assert!(Cubase.supports(OperatingSystem::MacOs));
        assert_eq!(Cubase.developer(), "Steinberg");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn cubase_has_no_default_path_on_linux() {
        assert!(matches!(
            Cubase.default_path(),
            Err(crate::error::DawError::UnsupportedOs { .. })
        ));
    }

    #[test]
    fn app_label_joins_name_and_version() {
        let app = DawApp::new("Cubase", "/Applications/Cubase 12.app", 12);
        assert_eq!(app.label(), "Cubase 12");
        assert_eq!(app.to_string(), "Cubase 12");
    }

    #[test]
    fn operating_system_serializes_lowercase() {
        let json = serde_json::to_string(&OperatingSystem::MacOs).unwrap();
        assert_eq!(json, "\"macos\"");
    }
}
