//! Copy of optional validation artifacts with relative structure preserved.
use anyhow::{Context as _, Result};

use super::{Context, Task, TaskResult, entry_file_name, handle_missing};
use crate::config::profile::Profile;
use crate::resources::fs;

/// Copy each of the profile's validation files, recreating the file's
/// relative directory structure under the profile's target directory. The
/// role default policy is `warn`: absent sources are reported and skipped.
///
/// Only profiles with validation entries run this task; with the default
/// manifest layout that is Debug only.
pub struct StageValidationArtifacts {
    profile: Profile,
    name: String,
}

impl StageValidationArtifacts {
    /// Create the task for `profile`.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            name: format!("Stage validation artifacts ({profile})"),
        }
    }
}

impl Task for StageValidationArtifacts {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        !ctx.config.profile(self.profile).validation_files.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        if !ctx.dry_run {
            std::fs::create_dir_all(&ctx.config.install_dir).with_context(|| {
                format!(
                    "creating install directory {}",
                    ctx.config.install_dir.display()
                )
            })?;
        }

        let target = ctx.config.profile_dir(self.profile);
        let mut copied = 0usize;
        for entry in &ctx.config.profile(self.profile).validation_files {
            let src = ctx.config.build_root.join(&entry.path);
            if !ctx.fs.exists(&src) {
                handle_missing(ctx, entry.on_missing, &src)?;
                continue;
            }

            // Recreate the entry's relative parent directories under the
            // profile directory.
            let dest = match entry.path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    target.join(parent).join(entry_file_name(&entry.path)?)
                }
                _ => target.join(entry_file_name(&entry.path)?),
            };

            if ctx.dry_run {
                ctx.log
                    .dry_run(&format!("copy {} -> {}", src.display(), dest.display()));
                continue;
            }
            fs::ensure_parent_dir(&dest)?;
            fs::copy_file(&src, &dest)?;
            ctx.log
                .debug(&format!("copied {} -> {}", src.display(), dest.display()));
            copied += 1;
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        ctx.log.info(&format!(
            "{copied} of {} validation artifacts staged",
            ctx.config.profile(self.profile).validation_files.len()
        ));
        Ok(TaskResult::Ok)
    }
}
