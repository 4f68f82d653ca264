//! Flattening of executable modules into the profile target directory.
use std::path::Path;

use anyhow::{Context as _, Result};

use super::{Context, Task, TaskResult, handle_missing};
use crate::config::profile::Profile;
use crate::resources::fs;

/// Scan the profile's executable directories (non-recursively) and copy
/// every regular file with a matching extension flat into the profile's
/// target directory.
pub struct StageExecutables {
    profile: Profile,
    name: String,
}

impl StageExecutables {
    /// Create the task for `profile`.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            name: format!("Stage executables ({profile})"),
        }
    }
}

/// Whether `path` has one of the configured executable-module extensions
/// (case-insensitive).
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

impl Task for StageExecutables {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_run(&self, ctx: &Context<'_>) -> bool {
        !ctx.config.profile(self.profile).executable_dirs.is_empty()
    }

    fn run(&self, ctx: &Context<'_>) -> Result<TaskResult> {
        let target = ctx.config.profile_dir(self.profile);
        if !ctx.dry_run {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("creating target directory {}", target.display()))?;
        }

        let mut copied = 0usize;
        let mut found_dirs = 0usize;
        for entry in &ctx.config.profile(self.profile).executable_dirs {
            let src = ctx.config.build_root.join(&entry.path);
            if !ctx.fs.exists(&src) {
                handle_missing(ctx, entry.on_missing, &src)?;
                continue;
            }
            found_dirs += 1;

            for file in ctx.fs.read_dir(&src)? {
                if !ctx.fs.is_file(&file)
                    || !matches_extension(&file, &ctx.config.executable_extensions)
                {
                    continue;
                }
                let Some(name) = file.file_name() else {
                    continue;
                };
                let dest = target.join(name);
                if ctx.dry_run {
                    ctx.log
                        .dry_run(&format!("copy {} -> {}", file.display(), dest.display()));
                } else {
                    fs::copy_file(&file, &dest)?;
                    ctx.log
                        .debug(&format!("copied {} -> {}", file.display(), dest.display()));
                }
                copied += 1;
            }
        }

        if ctx.dry_run {
            return Ok(TaskResult::DryRun);
        }
        if found_dirs == 0 {
            return Ok(TaskResult::Skipped(
                "no executable directories present".to_string(),
            ));
        }
        ctx.log
            .info(&format!("{copied} executable modules staged"));
        Ok(TaskResult::Ok)
    }
}
