//! The ordered, deduplicated list of install targets for one run.

use std::path::{Path, PathBuf};

/// One candidate installation destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Agent or directory label shown in the selection menu.
    pub name: String,
    /// Absolute destination directory for the skill.
    pub dest: PathBuf,
    /// Whether this target is part of the final selection.
    pub selected: bool,
}

/// Ordered sequence of [`Target`]s, deduplicated by destination path.
///
/// Insertion order is detection order and determines both menu display order
/// and the cursor range; entries are never reordered or removed within a run.
#[derive(Debug, Default)]
pub struct Registry {
    targets: Vec<Target>,
    keys: Vec<String>,
}

/// Normalised destination key used for target identity.
///
/// Separators and `.` components are collapsed; on Windows the key is
/// additionally case-folded and stripped of verbatim `\\?\` prefixes.
fn identity(path: &Path) -> String {
    let normalised: PathBuf = dunce::simplified(path).components().collect();
    let key = normalised.to_string_lossy().into_owned();
    if cfg!(windows) { key.to_lowercase() } else { key }
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            targets: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Add a target unless its destination is already registered.
    ///
    /// Idempotent on duplicate destinations: the first registration wins,
    /// including its display name. New targets start selected.
    pub fn add(&mut self, name: &str, dest: PathBuf) {
        let key = identity(&dest);
        if self.keys.contains(&key) {
            tracing::debug!("duplicate target {}: already registered", dest.display());
            return;
        }
        self.keys.push(key);
        self.targets.push(Target {
            name: name.to_string(),
            dest,
            selected: true,
        });
    }

    /// All targets, in insertion order.
    #[must_use]
    pub const fn targets(&self) -> &[Target] {
        self.targets.as_slice()
    }

    /// Number of registered targets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry holds no targets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Flip the selection flag of the target at `index`, if any.
    pub fn toggle(&mut self, index: usize) {
        if let Some(target) = self.targets.get_mut(index) {
            target.selected = !target.selected;
        }
    }

    /// The currently selected targets, in insertion order.
    #[must_use]
    pub fn selected(&self) -> Vec<&Target> {
        self.targets.iter().filter(|t| t.selected).collect()
    }
}
