use anyhow::Result;
use clap::Parser;

use stager_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);

    match args.command {
        cli::Command::Install(opts) => commands::install::run(&args.global, &opts, &log),
        cli::Command::Completions(opts) => commands::completions::run(&opts),
        cli::Command::Version => {
            let version = option_env!("STAGER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("stager {version}");
            Ok(())
        }
    }
}
