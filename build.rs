//! Build script: bakes the tool version into the binary.

use std::process::Command;

fn main() {
    // Prefer SKILL_INSTALL_VERSION env var if set (e.g., by CI release
    // workflow), otherwise fall back to git describe for local builds.
    if let Ok(version) = std::env::var("SKILL_INSTALL_VERSION") {
        println!("cargo:rustc-env=SKILL_INSTALL_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=SKILL_INSTALL_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SKILL_INSTALL_VERSION");
}
