//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI entry point for the skill installer.
#[derive(Parser, Debug)]
#[command(
    name = "skill-install",
    about = "Install the bundled swarm skill into local agent configuration directories",
    version = crate::version()
)]
pub struct Cli {
    /// Install to every detected target without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Overwrite targets where the skill is already installed
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Additional skills directory to offer as an install target (repeatable)
    #[arg(long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// Override the bundled skill source directory
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_are_interactive_and_safe() {
        let cli = Cli::parse_from(["skill-install"]);
        assert!(!cli.yes);
        assert!(!cli.force);
        assert!(!cli.verbose);
        assert!(cli.dirs.is_empty());
        assert!(cli.root.is_none());
    }

    #[test]
    fn parse_yes_short_and_long() {
        assert!(Cli::parse_from(["skill-install", "-y"]).yes);
        assert!(Cli::parse_from(["skill-install", "--yes"]).yes);
    }

    #[test]
    fn parse_force() {
        assert!(Cli::parse_from(["skill-install", "--force"]).force);
        assert!(Cli::parse_from(["skill-install", "-f"]).force);
    }

    #[test]
    fn parse_repeated_dirs_preserves_order() {
        let cli = Cli::parse_from(["skill-install", "--dir", "/a", "--dir", "/b"]);
        assert_eq!(cli.dirs, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn dir_requires_a_value() {
        let result = Cli::try_parse_from(["skill-install", "--dir"]);
        assert!(result.is_err(), "--dir without a value must be rejected");
    }

    #[test]
    fn parse_root_override() {
        let cli = Cli::parse_from(["skill-install", "--root", "/tmp/skill"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/skill")));
    }

    #[test]
    fn parse_verbose() {
        assert!(Cli::parse_from(["skill-install", "-v"]).verbose);
    }
}
