//! Ignore-aware recursive copy primitives.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context as _, Result};

/// Directory-entry names excluded from every copy, at every depth.
///
/// Version-control metadata and dependency caches never belong in an
/// installed skill.
pub const IGNORED_ENTRIES: &[&str] = &[".git", "node_modules"];

/// Whether a directory entry name is in the fixed ignore set.
#[must_use]
pub fn is_ignored(name: &OsStr) -> bool {
    IGNORED_ENTRIES.iter().any(|ignored| name == *ignored)
}

/// Recursively mirror `src` into `dst`.
///
/// Directories are created as needed (including `dst` itself); files are
/// copied byte-for-byte, overwriting any file already present. Entries named
/// in [`IGNORED_ENTRIES`] are skipped at every level of the traversal.
///
/// Symlinks within the source tree are *followed*: the function uses
/// [`Path::is_dir`] (which follows symlinks) so directory symlinks are
/// recursed into and their contents materialised rather than copying the
/// link itself.
///
/// # Errors
///
/// Any I/O error (permission, disk full) propagates with path context and
/// aborts this copy; the caller decides whether sibling targets continue.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)
        .with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in
        std::fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        if is_ignored(&entry.file_name()) {
            continue;
        }
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).with_context(|| {
                format!("copying {} to {}", src_path.display(), dst_path.display())
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn copies_files_and_subdirectories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("SKILL.md"), b"# swarm\n").unwrap();
        std::fs::create_dir(src.path().join("scripts")).unwrap();
        std::fs::write(src.path().join("scripts/run.sh"), b"#!/bin/sh\nexec node run.js\n")
            .unwrap();

        let target = dst.path().join("swarm");
        copy_tree(src.path(), &target).unwrap();

        assert_eq!(std::fs::read(target.join("SKILL.md")).unwrap(), b"# swarm\n");
        assert_eq!(
            std::fs::read(target.join("scripts/run.sh")).unwrap(),
            b"#!/bin/sh\nexec node run.js\n"
        );
    }

    #[test]
    fn skips_ignored_entries_at_top_level() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("file.txt"), b"content").unwrap();
        std::fs::create_dir(src.path().join(".git")).unwrap();
        std::fs::write(src.path().join(".git/HEAD"), b"ref: refs/heads/main").unwrap();
        std::fs::create_dir(src.path().join("node_modules")).unwrap();
        std::fs::write(src.path().join("node_modules/x.js"), b"x").unwrap();

        let target = dst.path().join("out");
        copy_tree(src.path(), &target).unwrap();

        assert!(target.join("file.txt").exists());
        assert!(!target.join(".git").exists());
        assert!(!target.join("node_modules").exists());
    }

    #[test]
    fn skips_ignored_entries_at_every_depth() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::create_dir_all(src.path().join("a/node_modules")).unwrap();
        std::fs::write(src.path().join("a/b.txt"), b"b").unwrap();
        std::fs::write(src.path().join("a/node_modules/x.txt"), b"x").unwrap();

        let target = dst.path().join("out");
        copy_tree(src.path(), &target).unwrap();

        assert!(target.join("a/b.txt").exists());
        assert!(
            !target.join("a/node_modules").exists(),
            "nested ignored directory must not be copied"
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        std::fs::write(src.path().join("a.txt"), b"new").unwrap();
        std::fs::write(dst.path().join("a.txt"), b"old").unwrap();

        copy_tree(src.path(), dst.path()).unwrap();
        assert_eq!(std::fs::read(dst.path().join("a.txt")).unwrap(), b"new");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dst = tempfile::tempdir().unwrap();
        let err = copy_tree(Path::new("/nonexistent/skill/source"), dst.path()).unwrap_err();
        assert!(err.to_string().contains("reading directory"));
    }

    #[test]
    fn ignore_set_matches_exact_names_only() {
        assert!(is_ignored(OsStr::new(".git")));
        assert!(is_ignored(OsStr::new("node_modules")));
        assert!(!is_ignored(OsStr::new(".gitignore")));
        assert!(!is_ignored(OsStr::new("node_modules_backup")));
    }
}
