//! Post-build artifact staging engine.
//!
//! Assembles a distributable install tree from a build tree: dependency
//! directories (assets, shaders) are copied recursively, shared-library and
//! executable files are flattened into the target, required singleton files
//! are copied with a hard failure when absent, and optional validation
//! artifacts are copied with their relative structure preserved — all driven
//! by a TOML manifest (`stager.toml`) with separate Debug and Release
//! profiles.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]** — parse the manifest and resolve it into a [`config::Config`]
//! - **[`resources`]** — plain filesystem copy primitives
//! - **[`tasks`]** — named units of work, one per copy role
//! - **[`commands`]** — top-level subcommand orchestration (`install`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod platform;
pub mod resources;
pub mod tasks;
