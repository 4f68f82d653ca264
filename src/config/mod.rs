//! Manifest loading and resolution into a runtime [`Config`].
pub mod manifest;
pub mod policy;
pub mod profile;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::platform::Platform;
use manifest::{Manifest, RawEntry};
use policy::MissingPolicy;
use profile::Profile;

/// A resolved copy entry: a build-root-relative source path plus the policy
/// applied when the source is absent.
#[derive(Debug, Clone)]
pub struct CopyEntry {
    /// Source path, relative to the build root.
    pub path: PathBuf,
    /// What to do when the source does not exist.
    pub on_missing: MissingPolicy,
}

impl CopyEntry {
    fn from_raw(raw: &RawEntry, default: MissingPolicy) -> Self {
        Self {
            path: PathBuf::from(raw.path()),
            on_missing: raw.policy_or(default),
        }
    }
}

/// Per-profile resolved path lists.
#[derive(Debug, Clone, Default)]
pub struct ProfileConfig {
    /// Directories scanned for executable modules, flattened into the target.
    pub executable_dirs: Vec<CopyEntry>,
    /// Optional files copied with their relative structure preserved.
    pub validation_files: Vec<CopyEntry>,
}

static EMPTY_PROFILE: ProfileConfig = ProfileConfig {
    executable_dirs: Vec::new(),
    validation_files: Vec::new(),
};

/// All resolved configuration for a staging run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized root of the build tree all source paths resolve against.
    pub build_root: PathBuf,
    /// Install destination directory (created on demand).
    pub install_dir: PathBuf,
    /// Lowercased executable-module extensions, without leading dots.
    pub executable_extensions: Vec<String>,
    /// Directories copied recursively into every profile's output.
    pub dependency_dirs: Vec<CopyEntry>,
    /// Required files copied unconditionally into every profile's output.
    pub dependent_files: Vec<CopyEntry>,
    profiles: HashMap<Profile, ProfileConfig>,
}

impl Config {
    /// Resolve a parsed [`Manifest`] into a runtime configuration.
    ///
    /// Relative manifest paths resolve against `base` (the manifest's
    /// directory); `build_root` and `dest` CLI overrides take precedence and
    /// resolve against the caller's working directory. The build root must
    /// exist and is canonicalized; the install destination is created later,
    /// on demand.
    ///
    /// Role defaults for missing sources: dependency and executable
    /// directories skip, dependent files fail, validation files warn.
    ///
    /// # Errors
    ///
    /// Returns an error if the build root cannot be canonicalized or a
    /// profile key in the manifest is not a known profile name.
    pub fn resolve(
        manifest: Manifest,
        base: &Path,
        build_root: Option<PathBuf>,
        dest: Option<PathBuf>,
        platform: &Platform,
    ) -> Result<Self, ConfigError> {
        let build_root_raw = build_root.unwrap_or_else(|| resolve_against(base, &manifest.build_root));
        let build_root =
            dunce::canonicalize(&build_root_raw).map_err(|source| ConfigError::BuildRoot {
                path: build_root_raw.display().to_string(),
                source,
            })?;

        let install_dir = dest.unwrap_or_else(|| resolve_against(base, &manifest.install_dir));

        let executable_extensions = manifest
            .executable_extensions
            .unwrap_or_else(|| platform.default_executable_extensions())
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        let dependency_dirs = manifest
            .dependency_dirs
            .iter()
            .map(|raw| CopyEntry::from_raw(raw, MissingPolicy::Skip))
            .collect();

        let dependent_files = manifest
            .dependent_files
            .iter()
            .map(|raw| CopyEntry::from_raw(raw, MissingPolicy::Fail))
            .collect();

        let mut profiles = HashMap::new();
        for (name, section) in manifest.profiles {
            let profile = Profile::from_arg(&name)?;
            profiles.insert(
                profile,
                ProfileConfig {
                    executable_dirs: section
                        .executable_dirs
                        .iter()
                        .map(|raw| CopyEntry::from_raw(raw, MissingPolicy::Skip))
                        .collect(),
                    validation_files: section
                        .validation_files
                        .iter()
                        .map(|raw| CopyEntry::from_raw(raw, MissingPolicy::Warn))
                        .collect(),
                },
            );
        }

        Ok(Self {
            build_root,
            install_dir,
            executable_extensions,
            dependency_dirs,
            dependent_files,
            profiles,
        })
    }

    /// Path lists for `profile`; empty lists when the manifest has no
    /// section for it.
    #[must_use]
    pub fn profile(&self, profile: Profile) -> &ProfileConfig {
        self.profiles.get(&profile).unwrap_or(&EMPTY_PROFILE)
    }

    /// The per-profile target directory under the install destination.
    #[must_use]
    pub fn profile_dir(&self, profile: Profile) -> PathBuf {
        self.install_dir.join(profile.dir_name())
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::platform::Os;

    fn manifest_from(content: &str) -> Manifest {
        toml::from_str(content).expect("parse manifest")
    }

    fn windows_platform() -> Platform {
        Platform::new(Os::Windows)
    }

    #[test]
    fn resolve_canonicalizes_build_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("build")).unwrap();
        let m = manifest_from("build-root = \"build\"\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert!(config.build_root.is_absolute());
        assert!(config.build_root.ends_with("build"));
    }

    #[test]
    fn resolve_fails_for_missing_build_root() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \"no-such-dir\"\n");
        let err = Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap_err();
        assert!(matches!(err, ConfigError::BuildRoot { .. }));
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("elsewhere")).unwrap();
        let m = manifest_from("build-root = \"no-such-dir\"\ninstall-dir = \"out\"\n");
        let config = Config::resolve(
            m,
            dir.path(),
            Some(dir.path().join("elsewhere")),
            Some(PathBuf::from("/tmp/override-out")),
            &windows_platform(),
        )
        .unwrap();
        assert!(config.build_root.ends_with("elsewhere"));
        assert_eq!(config.install_dir, PathBuf::from("/tmp/override-out"));
    }

    #[test]
    fn role_defaults_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from(
            r#"build-root = "."
dependency-dirs = ["Assets"]
dependent-files = ["libs/dxcompiler.dll"]

[profiles.debug]
executable-dirs = ["x64/Debug"]
validation-files = ["libs/VkLayer_khronos_validation.json"]
"#,
        );
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert_eq!(config.dependency_dirs[0].on_missing, MissingPolicy::Skip);
        assert_eq!(config.dependent_files[0].on_missing, MissingPolicy::Fail);
        let debug = config.profile(Profile::Debug);
        assert_eq!(debug.executable_dirs[0].on_missing, MissingPolicy::Skip);
        assert_eq!(debug.validation_files[0].on_missing, MissingPolicy::Warn);
    }

    #[test]
    fn per_entry_policy_overrides_role_default() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from(
            r#"build-root = "."
dependent-files = [{ path = "optional.dll", on-missing = "skip" }]
"#,
        );
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert_eq!(config.dependent_files[0].on_missing, MissingPolicy::Skip);
    }

    #[test]
    fn unknown_profile_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \".\"\n[profiles.staging]\nexecutable-dirs = []\n");
        let err = Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(_)));
    }

    #[test]
    fn missing_profile_section_yields_empty_lists() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \".\"\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert!(config.profile(Profile::Release).executable_dirs.is_empty());
        assert!(config.profile(Profile::Release).validation_files.is_empty());
    }

    #[test]
    fn extensions_default_per_platform() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \".\"\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert_eq!(config.executable_extensions, vec!["dll", "exe"]);

        let m = manifest_from("build-root = \".\"\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &Platform::new(Os::Linux)).unwrap();
        assert_eq!(config.executable_extensions, vec!["so"]);
    }

    #[test]
    fn extensions_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \".\"\nexecutable-extensions = [\".DLL\", \"Exe\"]\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert_eq!(config.executable_extensions, vec!["dll", "exe"]);
    }

    #[test]
    fn profile_dir_joins_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest_from("build-root = \".\"\ninstall-dir = \"out\"\n");
        let config =
            Config::resolve(m, dir.path(), None, None, &windows_platform()).unwrap();
        assert_eq!(
            config.profile_dir(Profile::Debug),
            dir.path().join("out").join("Debug")
        );
    }
}
