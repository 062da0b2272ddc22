use std::env;
use std::path::{Path, PathBuf};

use vergen_gix::{Emitter, GixBuilder};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Packagers building from a tarball can pin the SHA without git.
    println!("cargo:rerun-if-env-changed=CAPPROBE_BUILD_SHA");
    if let Some(sha) = env::var("CAPPROBE_BUILD_SHA")
        .ok()
        .and_then(|raw| short_sha(&raw))
    {
        emit_fallback(&sha);
        return;
    }

    // Git probing is best effort; a missing repo must never fail the build,
    // since lib.rs reads VERGEN_GIT_SHA with env!().
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let Some(repo_root) = find_repo_root(Path::new(&manifest_dir)) else {
        emit_fallback("unknown");
        return;
    };

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .dirty(false)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=capprobe-build-info: git probe unavailable: {err}");
            emit_fallback("unknown");
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit())
    {
        println!("cargo:warning=capprobe-build-info: git probe failed: {err}");
        emit_fallback("unknown");
    }
}

fn emit_fallback(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
    println!("cargo:rustc-env=VERGEN_GIT_DIRTY=false");
}

/// First seven hex digits of `raw`, if it looks like a commit hash.
fn short_sha(raw: &str) -> Option<String> {
    let candidate: String = raw.trim().chars().take(7).collect();
    (candidate.len() == 7 && candidate.chars().all(|c| c.is_ascii_hexdigit())).then_some(candidate)
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
