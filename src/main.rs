//! Binary entry point for `skill-install`.
use anyhow::Result;
use clap::Parser;

use skill_install::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    commands::install::run(&args)
}
