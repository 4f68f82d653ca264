//! Install profiles and profile-argument resolution.
use std::fmt;

use crate::error::ConfigError;

/// An install variant. Selects per-profile path lists and names the output
/// subdirectory of the install destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Debug build variant; the only profile that stages validation artifacts.
    Debug,
    /// Release build variant.
    Release,
}

impl Profile {
    /// All profiles in the order a full run stages them.
    pub const ALL: [Profile; 2] = [Profile::Debug, Profile::Release];

    /// Name of the per-profile subdirectory under the install destination.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Profile::Debug => "Debug",
            Profile::Release => "Release",
        }
    }

    /// Parse a profile name from a CLI argument or manifest key
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownProfile`] for unrecognised names.
    pub fn from_arg(s: &str) -> Result<Self, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Profile::Debug),
            "release" => Ok(Profile::Release),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Resolve the profile list from `--profile` arguments.
///
/// An empty argument list selects every profile, Debug first — the default
/// full run.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownProfile`] if any argument is not a valid
/// profile name.
pub fn resolve_from_args(args: &[String]) -> Result<Vec<Profile>, ConfigError> {
    if args.is_empty() {
        return Ok(Profile::ALL.to_vec());
    }
    let mut profiles = Vec::with_capacity(args.len());
    for arg in args {
        let profile = Profile::from_arg(arg)?;
        if !profiles.contains(&profile) {
            profiles.push(profile);
        }
    }
    Ok(profiles)
}
