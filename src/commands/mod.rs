//! Top-level subcommand orchestration.
pub mod completions;
pub mod install;
