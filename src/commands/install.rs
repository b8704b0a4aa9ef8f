//! The one command this tool has: build the registry, refine it, install.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::tty::IsTty as _;

use crate::agents::{self, SKILL_NAME};
use crate::cli::Cli;
use crate::error::ConfigError;
use crate::install;
use crate::logging;
use crate::menu::{self, MenuOutcome};
use crate::registry::Registry;

/// Run the installer end to end.
///
/// Builds the target registry (detected agents first, then `--dir` extras),
/// refines it interactively unless `--yes` or a non-interactive terminal
/// short-circuits the menu, and hands the final selection to the executor.
///
/// # Errors
///
/// Returns an error if no targets are available, the skill source cannot be
/// located, or at least one selected target failed to install. User
/// cancellation is not an error.
pub fn run(args: &Cli) -> Result<()> {
    let source = resolve_source(args.root.as_deref())?;
    tracing::debug!("skill source: {}", source.display());

    let mut registry = Registry::new();
    agents::home_dir().map_or_else(
        || tracing::warn!("cannot determine home directory; skipping agent detection"),
        |home| agents::detect_into(&mut registry, &home),
    );
    agents::add_extra_dirs(&mut registry, &args.dirs)?;

    if registry.is_empty() {
        return Err(ConfigError::NoTargets.into());
    }

    let interactive = !args.yes && io::stdin().is_tty() && io::stdout().is_tty();
    if interactive {
        if menu::select_targets(&mut registry)? == MenuOutcome::Cancelled {
            tracing::info!("installation cancelled");
            return Ok(());
        }
    } else {
        tracing::info!(
            "non-interactive: installing to all {} target(s)",
            registry.len()
        );
    }

    let selected = registry.selected();
    if selected.is_empty() {
        tracing::info!("no targets selected; nothing to do");
        return Ok(());
    }

    logging::stage(&format!("Installing the {SKILL_NAME} skill"));
    let report = install::install_selected(&selected, &source, args.force);

    if report.nothing_installed() {
        tracing::warn!(
            "nothing installed: all {} selected target(s) already exist (use --force to overwrite)",
            report.skipped
        );
    } else {
        tracing::info!(
            "{} installed, {} skipped, {} failed",
            report.installed,
            report.skipped,
            report.failed
        );
    }

    if report.failed > 0 {
        anyhow::bail!("{} target(s) failed to install", report.failed);
    }
    Ok(())
}

/// Resolve the bundled skill source directory.
///
/// An explicit `--root` must itself contain a `SKILL.md`; a mistyped path
/// fails here rather than at copy time. Otherwise the `SKILL_INSTALL_ROOT`
/// environment variable, the binary's location (and its two nearest
/// ancestors), and finally the current directory are tried; a candidate
/// qualifies when it contains a `SKILL.md`.
///
/// # Errors
///
/// Returns [`ConfigError::SourceNotFound`] when no candidate qualifies.
pub fn resolve_source(root_flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = root_flag {
        if root.join("SKILL.md").exists() {
            return Ok(root.to_path_buf());
        }
        return Err(ConfigError::SourceNotFound.into());
    }

    if let Ok(root) = std::env::var("SKILL_INSTALL_ROOT") {
        return Ok(PathBuf::from(root));
    }

    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        let candidates = [parent.to_path_buf(), parent.join(".."), parent.join("../..")];
        for candidate in &candidates {
            if candidate.join("SKILL.md").exists() {
                return Ok(dunce::canonicalize(candidate)?);
            }
        }
    }

    let cwd = std::env::current_dir()?;
    if cwd.join("SKILL.md").exists() {
        return Ok(cwd);
    }

    Err(ConfigError::SourceNotFound.into())
}
