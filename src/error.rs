//! Domain-specific error types for the staging engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`ConfigError`], [`StageError`])
//! while command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! StagerError
//! ├── Config(ConfigError) — manifest parsing, profile resolution
//! └── Stage(StageError)   — copy failures during staging
//! ```

use thiserror::Error;

/// Top-level error type for the staging engine.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum StagerError {
    /// Configuration-related error (manifest parsing, profile resolution, I/O).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Staging error (a copy operation failed).
    #[error("Staging error: {0}")]
    Stage(#[from] StageError),
}

/// Errors that arise from manifest loading and profile resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The manifest file does not exist.
    #[error("Manifest not found: {0}")]
    ManifestNotFound(String),

    /// An I/O error occurred while reading the manifest.
    #[error("IO error reading manifest {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest contains a TOML syntax or shape error.
    #[error("Invalid manifest {path}: {source}")]
    Parse {
        /// Path to the file that could not be parsed.
        path: String,
        /// Underlying TOML deserialization error.
        source: toml::de::Error,
    },

    /// The requested profile name is not recognised.
    #[error("Invalid profile '{0}': must be one of debug, release")]
    UnknownProfile(String),

    /// The resolved build root does not exist or cannot be canonicalized.
    #[error("Build root not accessible: {path}: {source}")]
    BuildRoot {
        /// The build root path that failed to resolve.
        path: String,
        /// Underlying I/O error from canonicalization.
        source: std::io::Error,
    },
}

/// Errors that arise from staging copy operations.
#[derive(Error, Debug)]
pub enum StageError {
    /// A required source path was absent (entry policy `fail`).
    #[error("Required source not found: {0}")]
    MissingSource(String),

    /// A manifest entry has a path with no final component.
    #[error("Entry path has no file name: {0}")]
    InvalidEntryPath(String),
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn config_error_manifest_not_found_display() {
        let e = ConfigError::ManifestNotFound("stager.toml".to_string());
        assert_eq!(e.to_string(), "Manifest not found: stager.toml");
    }

    #[test]
    fn config_error_io_display() {
        let e = ConfigError::Io {
            path: "conf/stager.toml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.to_string().contains("conf/stager.toml"));
        assert!(e.to_string().contains("IO error reading manifest"));
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "stager.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn config_error_unknown_profile_display() {
        let e = ConfigError::UnknownProfile("staging".to_string());
        assert_eq!(
            e.to_string(),
            "Invalid profile 'staging': must be one of debug, release"
        );
    }

    #[test]
    fn stage_error_missing_source_display() {
        let e = StageError::MissingSource("build/libs/dxcompiler.dll".to_string());
        assert_eq!(
            e.to_string(),
            "Required source not found: build/libs/dxcompiler.dll"
        );
    }

    #[test]
    fn stager_error_from_config_error() {
        let e: StagerError = ConfigError::ManifestNotFound("x".to_string()).into();
        assert!(e.to_string().contains("Configuration error"));
    }

    #[test]
    fn stager_error_from_stage_error() {
        let e: StagerError = StageError::MissingSource("y".to_string()).into();
        assert!(e.to_string().contains("Staging error"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<StagerError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<StageError>();
    }

    #[test]
    fn stage_error_converts_to_anyhow() {
        let e = StageError::MissingSource("z".to_string());
        let _anyhow_err: anyhow::Error = e.into();
    }
}
