//! Recursive copy of dependency directories (assets, shaders, …).
use anyhow::{Context as _, Result};

use super::{Context, Task, TaskResult, entry_file_name, handle_missing};
use crate::config::profile::Profile;
use crate::resources::fs;

/// Copy every configured dependency directory into the profile's target
/// directory under its basename, merging with and overwriting any existing
/// destination contents.
pub struct StageDependencyDirs {
    profile: Profile,
    name: String,
}

impl StageDependencyDirs {
    /// Create the task for `profile`.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            name: format!("Stage dependency directories ({profile})"),
        }
    }
}

impl Task for StageDependencyDirs {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        !ctx.config.dependency_dirs.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let target = ctx.config.profile_dir(self.profile);
        if !ctx.dry_run {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("creating target directory {}", target.display()))?;
        }

        let mut copied = 0usize;
        for entry in &ctx.config.dependency_dirs {
            let src = ctx.config.build_root.join(&entry.path);
            if !ctx.fs.exists(&src) {
                handle_missing(ctx, entry.on_missing, &src)?;
                continue;
            }

            let dest = target.join(entry_file_name(&entry.path)?);
            if ctx.dry_run {
                ctx.log
                    .dry_run(&format!("copy {} -> {}", src.display(), dest.display()));
                continue;
            }

            fs::copy_dir_recursive(&src, &dest)?;
            ctx.log
                .debug(&format!("copied {} -> {}", src.display(), dest.display()));
            copied += 1;
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        ctx.log.info(&format!(
            "{copied} of {} dependency directories staged",
            ctx.config.dependency_dirs.len()
        ));
        Ok(TaskResult::Ok)
    }
}
