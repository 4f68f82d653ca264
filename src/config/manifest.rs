//! Staging manifest deserialization.
//!
//! The manifest (`stager.toml`) is the externally supplied configuration
//! structure that drives a run: build root, install destination, and path
//! lists grouped by role. Path lists are ordered and immutable once loaded.
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::policy::MissingPolicy;
use crate::error::ConfigError;

/// A single path entry in a role list — either a plain path string or a
/// structured `{ path, on-missing }` pair for an explicit policy override.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// Plain string: `"Assets"` — the role's default policy applies.
    Simple(String),
    /// Structured: `{ path = "Assets", on-missing = "warn" }`.
    WithPolicy {
        /// Build-root-relative source path.
        path: String,
        /// Missing-source policy override for this entry.
        #[serde(rename = "on-missing")]
        on_missing: MissingPolicy,
    },
}

impl RawEntry {
    /// The entry's path, regardless of form.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            RawEntry::Simple(path) | RawEntry::WithPolicy { path, .. } => path,
        }
    }

    /// The entry's policy, falling back to the role default.
    #[must_use]
    pub fn policy_or(&self, default: MissingPolicy) -> MissingPolicy {
        match self {
            RawEntry::Simple(_) => default,
            RawEntry::WithPolicy { on_missing, .. } => *on_missing,
        }
    }
}

/// Per-profile section of the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProfileSection {
    /// Directories scanned (non-recursively) for executable modules.
    #[serde(default)]
    pub executable_dirs: Vec<RawEntry>,
    /// Optional files copied with their relative structure preserved.
    #[serde(default)]
    pub validation_files: Vec<RawEntry>,
}

/// The deserialized staging manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    /// Root of the build tree, relative to the manifest's directory.
    #[serde(default = "default_build_root")]
    pub build_root: PathBuf,
    /// Install destination, relative to the manifest's directory.
    #[serde(default = "default_install_dir")]
    pub install_dir: PathBuf,
    /// Executable-module extensions; platform defaults apply when absent.
    #[serde(default)]
    pub executable_extensions: Option<Vec<String>>,
    /// Directories copied recursively into every profile's output.
    #[serde(default)]
    pub dependency_dirs: Vec<RawEntry>,
    /// Individually named required files copied into every profile's output.
    #[serde(default)]
    pub dependent_files: Vec<RawEntry>,
    /// Per-profile sections keyed by profile name (`debug`, `release`).
    #[serde(default)]
    pub profiles: HashMap<String, ProfileSection>,
}

fn default_build_root() -> PathBuf {
    PathBuf::from("..")
}

fn default_install_dir() -> PathBuf {
    PathBuf::from("Install")
}

/// Load and parse the manifest at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::ManifestNotFound`] when the file is absent,
/// [`ConfigError::Io`] when it cannot be read, and [`ConfigError::Parse`]
/// when the TOML is malformed.
pub fn load(path: &Path) -> Result<Manifest, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ManifestNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
