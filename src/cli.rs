use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the staging tool.
#[derive(Parser, Debug)]
#[command(
    name = "stager",
    about = "Configuration-driven post-build artifact staging tool",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the staging manifest
    #[arg(short, long, global = true, default_value = "stager.toml")]
    pub manifest: std::path::PathBuf,

    /// Override the build root declared in the manifest
    #[arg(long, global = true)]
    pub build_root: Option<std::path::PathBuf>,

    /// Override the install destination declared in the manifest
    #[arg(long, global = true)]
    pub dest: Option<std::path::PathBuf>,

    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the install tree for one or more profiles
    Install(InstallOpts),
    /// Generate shell completion scripts
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InstallOpts {
    /// Profiles to stage (debug, release); defaults to debug then release
    #[arg(short, long, value_delimiter = ',')]
    pub profile: Vec<String>,

    /// Skip specific tasks
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific tasks
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
