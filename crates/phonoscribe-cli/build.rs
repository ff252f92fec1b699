use std::process::Command;

fn main() {
    // Git commit short hash for the --version string
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_HASH={hash}");

    // .git is at the workspace root, two levels up from this crate
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}
