//! Detection of agent configuration directories that can host skills.
//!
//! Supplies the [`Registry`](crate::registry::Registry) with candidate
//! targets: well-known agents whose configuration directory exists on this
//! machine, followed by any user-supplied extra directories.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::registry::Registry;

/// Name of the bundled skill; also the destination directory name.
pub const SKILL_NAME: &str = "swarm";

/// A well-known agent whose configuration directory may host skills.
#[derive(Debug, Clone, Copy)]
struct KnownAgent {
    /// Display name shown in the selection menu.
    name: &'static str,
    /// Home-relative configuration directory.
    config_dir: &'static str,
    /// Environment variable overriding the configuration directory.
    env_override: Option<&'static str>,
}

const KNOWN_AGENTS: &[KnownAgent] = &[
    KnownAgent {
        name: "Codex",
        config_dir: ".codex",
        env_override: Some("CODEX_HOME"),
    },
    KnownAgent {
        name: "Claude Code",
        config_dir: ".claude",
        env_override: None,
    },
    KnownAgent {
        name: "GitHub Copilot",
        config_dir: ".copilot",
        env_override: None,
    },
];

/// Resolve an agent's configuration base directory.
///
/// A non-empty environment override beats the home-relative default.
fn config_base(agent: KnownAgent, home: &Path, env_value: Option<&OsStr>) -> PathBuf {
    env_value
        .filter(|v| !v.is_empty())
        .map_or_else(|| home.join(agent.config_dir), PathBuf::from)
}

/// Destination for the bundled skill under an agent's configuration base.
fn skill_dest(base: &Path) -> PathBuf {
    base.join("skills").join(SKILL_NAME)
}

/// Add every agent present on this machine to `registry`, in declaration
/// order.
///
/// An agent counts as present when its configuration base directory exists;
/// absent agents are skipped silently (debug log only).
pub fn detect_into(registry: &mut Registry, home: &Path) {
    for agent in KNOWN_AGENTS.iter().copied() {
        let env_value = agent.env_override.and_then(std::env::var_os);
        let base = config_base(agent, home, env_value.as_deref());
        if base.is_dir() {
            registry.add(agent.name, skill_dest(&base));
        } else {
            tracing::debug!("{}: {} not found, skipping", agent.name, base.display());
        }
    }
}

/// Append user-supplied extra skills directories to `registry`.
///
/// Each directory is resolved to an absolute path and offered as
/// `<dir>/swarm`, labelled with the path as given on the command line.
///
/// # Errors
///
/// Returns an error if a path cannot be resolved against the current
/// working directory.
pub fn add_extra_dirs(registry: &mut Registry, dirs: &[PathBuf]) -> Result<()> {
    for dir in dirs {
        let absolute = std::path::absolute(dir)
            .with_context(|| format!("resolving --dir {}", dir.display()))?;
        registry.add(&dir.display().to_string(), absolute.join(SKILL_NAME));
    }
    Ok(())
}

/// The current user's home directory, if one can be determined.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::home_dir()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const CODEX: KnownAgent = KnownAgent {
        name: "Codex",
        config_dir: ".codex",
        env_override: Some("CODEX_HOME"),
    };

    #[test]
    fn config_base_defaults_to_home_relative() {
        let base = config_base(CODEX, Path::new("/home/user"), None);
        assert_eq!(base, PathBuf::from("/home/user/.codex"));
    }

    #[test]
    fn config_base_honours_env_override() {
        let base = config_base(CODEX, Path::new("/home/user"), Some(OsStr::new("/srv/codex")));
        assert_eq!(base, PathBuf::from("/srv/codex"));
    }

    #[test]
    fn config_base_ignores_empty_override() {
        let base = config_base(CODEX, Path::new("/home/user"), Some(OsStr::new("")));
        assert_eq!(base, PathBuf::from("/home/user/.codex"));
    }

    #[test]
    fn skill_dest_nests_under_skills() {
        assert_eq!(
            skill_dest(Path::new("/home/user/.codex")),
            PathBuf::from("/home/user/.codex/skills/swarm")
        );
    }

    #[test]
    fn detect_into_adds_only_present_agents() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir(home.path().join(".claude")).unwrap();

        let mut registry = Registry::new();
        detect_into(&mut registry, home.path());

        let names: Vec<&str> = registry.targets().iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"Claude Code"));
        assert!(!names.contains(&"GitHub Copilot"));
        let claude = registry
            .targets()
            .iter()
            .find(|t| t.name == "Claude Code")
            .unwrap();
        assert_eq!(claude.dest, home.path().join(".claude/skills/swarm"));
    }

    #[test]
    fn extra_dirs_are_appended_with_skill_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = Registry::new();
        add_extra_dirs(&mut registry, &[dir.path().to_path_buf()]).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.targets()[0].dest, dir.path().join(SKILL_NAME));
    }

    #[test]
    fn extra_dir_duplicating_detected_target_is_dropped() {
        let home = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(home.path().join(".claude")).unwrap();

        let mut registry = Registry::new();
        detect_into(&mut registry, home.path());
        let before = registry.len();

        let dup = home.path().join(".claude/skills");
        add_extra_dirs(&mut registry, &[dup]).unwrap();
        assert_eq!(registry.len(), before, "duplicate destination discarded");
    }
}
