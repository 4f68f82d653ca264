// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed build tree and manifest writer so
// each integration test can set up an isolated environment without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use stager_cli::cli::{GlobalOpts, InstallOpts};
use stager_cli::commands;
use stager_cli::logging::Logger;

/// An isolated build tree and install destination backed by a
/// [`tempfile::TempDir`].
///
/// Layout: `<root>/build/` is the build root, `<root>/out/` the install
/// destination written by [`StageFixture::write_manifest`], and
/// `<root>/stager.toml` the manifest. The directory is deleted when the
/// fixture is dropped.
pub struct StageFixture {
    /// Temporary directory containing the test build tree.
    pub root: tempfile::TempDir,
}

impl StageFixture {
    /// Create a fixture with an empty build root.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(root.path().join("build")).expect("create build root");
        Self { root }
    }

    /// Path to the fixture root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the build root.
    pub fn build_root(&self) -> PathBuf {
        self.root.path().join("build")
    }

    /// Path to the install destination.
    pub fn install_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Write a file under the build root, creating parent directories.
    pub fn write_source(&self, rel: &str, bytes: &[u8]) {
        let path = self.build_root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source dirs");
        }
        std::fs::write(path, bytes).expect("write source file");
    }

    /// Write a manifest pointing at the fixture's build root and install
    /// dir, followed by `body` (role lists and profile sections).
    pub fn write_manifest(&self, body: &str) -> PathBuf {
        let path = self.root.path().join("stager.toml");
        let content = format!("build-root = \"build\"\ninstall-dir = \"out\"\n{body}");
        std::fs::write(&path, content).expect("write manifest");
        path
    }

    /// Run the install command for the named profiles (empty = all).
    pub fn run_install(&self, manifest: &Path, profiles: &[&str]) -> anyhow::Result<()> {
        self.run_install_with(manifest, profiles, &[], &[], false)
    }

    /// Run the install command with full control over filters and dry-run.
    pub fn run_install_with(
        &self,
        manifest: &Path,
        profiles: &[&str],
        skip: &[&str],
        only: &[&str],
        dry_run: bool,
    ) -> anyhow::Result<()> {
        let global = GlobalOpts {
            manifest: manifest.to_path_buf(),
            build_root: None,
            dest: None,
            dry_run,
        };
        let opts = InstallOpts {
            profile: profiles.iter().map(ToString::to_string).collect(),
            skip: skip.iter().map(ToString::to_string).collect(),
            only: only.iter().map(ToString::to_string).collect(),
        };
        let log = Logger::new(false);
        commands::install::run(&global, &opts, &log)
    }
}

/// Collect every file under `root` as a relative-path → contents map.
///
/// Returns an empty map when `root` does not exist.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut out = BTreeMap::new();
    collect(root, root, &mut out);
    out
}

fn collect(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
    if !dir.exists() {
        return;
    }
    for entry in std::fs::read_dir(dir).expect("read dir") {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("relative path")
                .to_string_lossy()
                .replace('\\', "/");
            out.insert(rel, std::fs::read(&path).expect("read file"));
        }
    }
}
