//! The install executor: conflict policy and per-target copy execution.
//!
//! Targets are processed strictly sequentially, in registry order. Failures
//! are isolated per target: a permission error on one destination is
//! reported and the remaining targets are still attempted.

use std::fmt;
use std::path::Path;

use crate::error::TargetError;
use crate::fsops;
use crate::registry::Target;

/// Per-target result of one install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The skill was installed into a previously absent destination.
    Installed,
    /// The destination already existed and `--force` was not given.
    SkippedExists,
    /// The existing destination was removed and the skill installed anew.
    Reinstalled,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::SkippedExists => write!(f, "already exists, skipped"),
            Self::Reinstalled => write!(f, "reinstalled"),
        }
    }
}

/// Aggregate counts for one executor run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InstallReport {
    /// Targets installed or reinstalled.
    pub installed: usize,
    /// Targets skipped because the destination already existed.
    pub skipped: usize,
    /// Targets that failed with an I/O error.
    pub failed: usize,
}

impl InstallReport {
    /// Whether a non-empty selection produced only skips.
    ///
    /// This deserves a distinct summary: the run did nothing, but nothing
    /// went wrong either.
    #[must_use]
    pub const fn nothing_installed(&self) -> bool {
        self.installed == 0 && self.failed == 0 && self.skipped > 0
    }
}

/// Install the skill into a single target destination.
///
/// Existence is checked here, authoritatively, regardless of what the menu
/// displayed earlier.
fn install_one(target: &Target, source: &Path, force: bool) -> Result<InstallOutcome, TargetError> {
    let dest = target.dest.as_path();
    let existed = dest.exists();

    if existed && !force {
        return Ok(InstallOutcome::SkippedExists);
    }
    if existed {
        std::fs::remove_dir_all(dest).map_err(|err| TargetError::Remove {
            path: dest.display().to_string(),
            source: err,
        })?;
    }
    fsops::copy_tree(source, dest).map_err(|err| TargetError::Copy {
        path: dest.display().to_string(),
        source: err.into(),
    })?;

    Ok(if existed {
        InstallOutcome::Reinstalled
    } else {
        InstallOutcome::Installed
    })
}

/// Run the executor over the selected targets, in order.
///
/// Each target is one logical unit (check, remove, recreate, copy); console
/// reporting is ordered and never interleaved. Conflicts and I/O failures
/// are converted to reported outcomes here rather than propagated.
#[must_use]
pub fn install_selected(targets: &[&Target], source: &Path, force: bool) -> InstallReport {
    let mut report = InstallReport::default();
    for target in targets {
        match install_one(target, source, force) {
            Ok(InstallOutcome::SkippedExists) => {
                tracing::warn!(
                    "{}: already exists at {} (use --force to overwrite)",
                    target.name,
                    target.dest.display()
                );
                report.skipped += 1;
            }
            Ok(outcome) => {
                tracing::info!("{}: {outcome} at {}", target.name, target.dest.display());
                report.installed += 1;
            }
            Err(err) => {
                let err = anyhow::Error::from(err);
                tracing::error!("{}: {err:#}", target.name);
                report.failed += 1;
            }
        }
    }
    report
}
