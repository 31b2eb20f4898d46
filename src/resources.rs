// src/resources.rs
//! Locating bundled resources (logo, QR codes).
//!
//! Lookup order:
//! 1. `$EMICO_RESOURCES` if set,
//! 2. `assets/` next to the running executable (installed/bundled layout),
//! 3. `assets/` in the crate directory (`cargo run`).

use std::env;
use std::path::{Path, PathBuf};

use crate::config::consts::{RESOURCE_DIR, RESOURCE_ENV};

pub fn resource_root() -> PathBuf {
    if let Some(dir) = env::var_os(RESOURCE_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(RESOURCE_DIR)))
        .filter(|p| p.is_dir())
    {
        return dir;
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR)
}

/// `root/relative` if it exists.
pub fn existing(root: &Path, relative: &str) -> Option<PathBuf> {
    let p = root.join(relative);
    if p.is_file() {
        Some(p)
    } else {
        logd!("Resources: missing {}", p.display());
        None
    }
}
