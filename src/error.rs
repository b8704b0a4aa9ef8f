//! Domain-specific error types for the skill installer.
//!
//! Configuration errors abort the run before any filesystem side effect.
//! Target errors are caught at the per-target boundary inside the install
//! executor and converted into a reported outcome; they never abort sibling
//! targets. Command handlers at the CLI boundary convert both to
//! [`anyhow::Error`] via the standard `?` operator.

use thiserror::Error;

/// Errors detected before any filesystem side effect occurs.
///
/// These are fatal: the process reports them to standard error and exits
/// non-zero without touching any destination.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No agent configuration directories were found and no `--dir` was given.
    #[error("no install targets: no known agent directories detected and no --dir supplied")]
    NoTargets,

    /// The bundled skill source tree could not be located.
    #[error(
        "cannot locate the skill source tree (no SKILL.md found): use --root or set SKILL_INSTALL_ROOT"
    )]
    SourceNotFound,
}

/// A failure while installing into one target destination.
#[derive(Error, Debug)]
pub enum TargetError {
    /// Removing an existing install (under `--force`) failed.
    #[error("failed to remove existing install at {path}")]
    Remove {
        /// Destination that could not be removed.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Copying the skill tree into the destination failed.
    #[error("failed to copy skill into {path}")]
    Copy {
        /// Destination that could not be populated.
        path: String,
        /// Underlying copy error, with path context.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
