// Shared helpers for integration tests.
//
// Builds a representative bundled-skill source tree inside a temporary
// directory so each integration test can exercise the copy engine and the
// executor without repeating filesystem boilerplate.
#![allow(dead_code)]

use std::path::Path;

/// Write a representative skill source tree under `root`.
///
/// Creates:
/// - `SKILL.md`                         — the skill manifest marker
/// - `scripts/run.sh`                   — a nested regular file
/// - `.git/HEAD`                        — ignored at the top level
/// - `node_modules/dep/index.js`        — ignored at the top level
/// - `scripts/node_modules/x.txt`       — ignored at a nested level
pub fn write_skill_source(root: &Path) {
    std::fs::create_dir_all(root.join("scripts")).expect("create scripts dir");
    std::fs::write(root.join("SKILL.md"), "# swarm\n").expect("write SKILL.md");
    std::fs::write(root.join("scripts/run.sh"), "#!/bin/sh\necho swarm\n")
        .expect("write run.sh");

    std::fs::create_dir_all(root.join(".git")).expect("create .git");
    std::fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").expect("write HEAD");

    std::fs::create_dir_all(root.join("node_modules/dep")).expect("create node_modules");
    std::fs::write(root.join("node_modules/dep/index.js"), "module.exports = {};\n")
        .expect("write dep");

    std::fs::create_dir_all(root.join("scripts/node_modules")).expect("create nested ignored");
    std::fs::write(root.join("scripts/node_modules/x.txt"), "x\n").expect("write nested ignored");
}

/// Assert that `dest` holds exactly the installable part of the source tree:
/// real files present, ignored entries absent at every depth.
pub fn assert_installed_tree(dest: &Path) {
    assert!(dest.join("SKILL.md").exists(), "SKILL.md missing");
    assert!(dest.join("scripts/run.sh").exists(), "scripts/run.sh missing");
    assert!(!dest.join(".git").exists(), ".git must not be installed");
    assert!(
        !dest.join("node_modules").exists(),
        "node_modules must not be installed"
    );
    assert!(
        !dest.join("scripts/node_modules").exists(),
        "nested node_modules must not be installed"
    );
}
