use std::path::Path;
use std::process::Command;

/// Short commit id for `--version`, or "unknown" outside a git checkout.
fn git_revision() -> String {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let rev = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if rev.is_empty() { "unknown".into() } else { rev }
        }
        _ => "unknown".into(),
    }
}

fn main() {
    println!("cargo:rustc-env=PHIDDLE_GIT_HASH={}", git_revision());

    for path in [".git/HEAD", ".git/index", ".git/packed-refs"] {
        if Path::new(path).exists() {
            println!("cargo:rerun-if-changed={path}");
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
