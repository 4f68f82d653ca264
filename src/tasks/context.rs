//! Shared context for task execution.
use std::sync::Arc;

use crate::config::Config;
use crate::logging::Logger;
use crate::operations::{FileSystemOps, SystemFileSystemOps};

/// Shared context for task execution.
pub struct Context<'a> {
    /// Resolved configuration for this run.
    pub config: &'a Config,
    /// Logger for output and task recording.
    pub log: &'a Logger,
    /// Whether to preview changes without applying them.
    pub dry_run: bool,
    /// Filesystem query abstraction (injectable for testing).
    pub fs: Arc<dyn FileSystemOps>,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .field("fs", &"<dyn FileSystemOps>")
            .finish_non_exhaustive()
    }
}

impl<'a> Context<'a> {
    /// Create a context backed by the real filesystem.
    #[must_use]
    pub fn new(config: &'a Config, log: &'a Logger, dry_run: bool) -> Self {
        Self {
            config,
            log,
            dry_run,
            fs: Arc::new(SystemFileSystemOps),
        }
    }

    /// Create a copy of this context with a different [`FileSystemOps`]
    /// implementation, for tests that must not touch the real filesystem.
    #[cfg(test)]
    #[must_use]
    pub fn with_fs(&self, fs: Arc<dyn FileSystemOps>) -> Self {
        Self {
            config: self.config,
            log: self.log,
            dry_run: self.dry_run,
            fs,
        }
    }
}
