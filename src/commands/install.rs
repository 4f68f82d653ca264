//! The `install` subcommand: assemble the install tree.
use std::path::Path;

use anyhow::Result;

use crate::cli::{GlobalOpts, InstallOpts};
use crate::config::{Config, manifest, profile};
use crate::logging::Logger;
use crate::platform::Platform;
use crate::tasks::{self, Context, Task};

/// Run the install command.
///
/// Loads the manifest, resolves the requested profiles (all of them when
/// none are named), and executes the staging task sequence per profile. A
/// failed task stops the run before any subsequent task executes.
///
/// # Errors
///
/// Returns an error if manifest loading, configuration resolution, or any
/// staging task fails.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Logger) -> Result<()> {
    let platform = Platform::detect();

    let version = option_env!("STAGER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("stager {version}"));

    log.stage("Loading manifest");
    let parsed = manifest::load(&global.manifest)?;
    let base = manifest_base(&global.manifest);
    let config = Config::resolve(
        parsed,
        base,
        global.build_root.clone(),
        global.dest.clone(),
        &platform,
    )?;
    log.info(&format!("build root: {}", config.build_root.display()));
    log.info(&format!("install dir: {}", config.install_dir.display()));

    let profiles = profile::resolve_from_args(&opts.profile)?;
    let ctx = Context::new(&config, log, global.dry_run);

    let mut all_tasks: Vec<Box<dyn Task>> = Vec::new();
    for p in &profiles {
        all_tasks.extend(tasks::profile_tasks(*p));
    }

    // Filter by --skip and --only
    let tasks_to_run: Vec<&dyn Task> = all_tasks
        .iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !opts.only.is_empty() {
                return opts.only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !opts.skip.is_empty() {
                return !opts.skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect();

    for task in tasks_to_run {
        tasks::execute(task, &ctx);
        // A fail-policy miss or copy error aborts the remaining sequence.
        if log.has_failures() {
            break;
        }
    }

    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("one or more staging tasks failed");
    }
    Ok(())
}

/// Directory the manifest's relative paths resolve against.
fn manifest_base(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
