use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use kern_groups_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "info" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level)).init();
    cli.command.run()
}
