//! Named units of work, one per copy role.
pub mod context;
pub mod dependency_dirs;
pub mod dependent_files;
pub mod executables;
pub mod validation;

pub use context::Context;

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;

use crate::config::policy::MissingPolicy;
use crate::config::profile::Profile;
use crate::error::StageError;
use crate::logging::TaskStatus;

/// Outcome of a task run.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task ran and applied its changes.
    Ok,
    /// Task had nothing to do, with a reason.
    Skipped(String),
    /// Task previewed its changes without applying them.
    DryRun,
}

/// A named, executable staging task.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task has any work for the loaded configuration.
    fn should_run(&self, ctx: &Context<'_>) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a copy fails or a `fail`-policy source is absent.
    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult>;
}

/// The staging tasks for one profile, in execution order: dependency
/// directories, executables, dependent files, validation artifacts.
#[must_use]
pub fn profile_tasks(profile: Profile) -> Vec<Box<dyn Task>> {
    vec![
        Box::new(dependency_dirs::StageDependencyDirs::new(profile)),
        Box::new(executables::StageExecutables::new(profile)),
        Box::new(dependent_files::StageDependentFiles::new(profile)),
        Box::new(validation::StageValidationArtifacts::new(profile)),
    ]
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context<'_>) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

/// Apply an entry's missing-source policy: silently skip, warn and skip, or
/// fail the task.
pub(crate) fn handle_missing(
    ctx: &Context<'_>,
    policy: MissingPolicy,
    src: &Path,
) -> Result<()> {
    match policy {
        MissingPolicy::Skip => {
            ctx.log
                .debug(&format!("source not present, skipping: {}", src.display()));
            Ok(())
        }
        MissingPolicy::Warn => {
            ctx.log
                .warn(&format!("source not found: {}", src.display()));
            Ok(())
        }
        MissingPolicy::Fail => {
            Err(StageError::MissingSource(src.display().to_string()).into())
        }
    }
}

/// Final path component of an entry, tolerating trailing separators.
pub(crate) fn entry_file_name(path: &Path) -> Result<&OsStr> {
    path.file_name()
        .ok_or_else(|| StageError::InvalidEntryPath(path.display().to_string()).into())
}

/// Shared helpers for task unit tests.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub mod test_helpers {
    use std::path::Path;

    use crate::config::Config;
    use crate::platform::{Os, Platform};

    /// Parse a manifest string and resolve it against `base` with a Windows
    /// platform (so `dll`/`exe` extension defaults apply deterministically).
    pub fn config_from(manifest: &str, base: &Path) -> Config {
        let parsed = toml::from_str(manifest).expect("parse manifest");
        Config::resolve(parsed, base, None, None, &Platform::new(Os::Windows))
            .expect("resolve config")
    }
}
