//! Build script for tlctl - embeds git commit hash and build date
//!
//! Dev builds emit `VERGEN_GIT_SHA` with the commit hash, or `unknown` when
//! git is unavailable. Builds with the `release` feature emit
//! `VERGEN_GIT_SHA=release` so the version string stays clean.
//!
//! `TLCTL_BUILD_DATE` is always emitted.

use std::process::Command;

/// Build date as YYYY-MM-DD, honoring SOURCE_DATE_EPOCH when set.
fn build_date() -> String {
    let mut cmd = Command::new("date");
    match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => cmd.args(["-u", "-d", &format!("@{epoch}"), "+%Y-%m-%d"]),
        Err(_) => cmd.arg("+%Y-%m-%d"),
    };
    cmd.output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() -> Result<(), Box<dyn std::error::Error>> {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let git = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=TLCTL_BUILD_DATE={}", build_date());

    #[cfg(feature = "release")]
    {
        println!("cargo:rustc-env=VERGEN_GIT_SHA=release");
    }

    #[cfg(not(feature = "release"))]
    {
        if let Err(e) = emit_git_sha() {
            println!("cargo:warning=Failed to get git info: {e}");
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
