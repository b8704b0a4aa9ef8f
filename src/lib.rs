//! Installer for the bundled swarm skill.
//!
//! Detects agent configuration directories on the local machine (Codex,
//! Claude Code, GitHub Copilot), lets the user refine the target set in an
//! interactive terminal menu, and mirrors the bundled skill tree into each
//! selected destination.
//!
//! The public API is organised into five layers:
//!
//! - **[`agents`]** — detection of candidate installation targets
//! - **[`registry`]** — the ordered, deduplicated target list
//! - **[`menu`]** — interactive multi-select over the registry
//! - **[`install`]** — conflict policy and per-target execution
//! - **[`fsops`]** — ignore-aware recursive copy primitives
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod agents;
pub mod cli;
pub mod commands;
pub mod error;
pub mod fsops;
pub mod install;
pub mod logging;
pub mod menu;
pub mod registry;

/// Tool version baked in at build time, falling back to the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("SKILL_INSTALL_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}
