// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `ontomatch.toml`.
//!
//! An explicit path (`-C`/`--config` or `ONTOMATCH_CONFIG`) must exist; a
//! directory there stands for the `ontomatch.toml` inside it. Without one,
//! the working directory and its ancestors are searched up to the nearest
//! repository root.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Nearest `ontomatch.toml` at or above `start_dir`, not past a `.git` root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if is_repo_root(dir) {
            break;
        }
    }
    None
}

fn is_repo_root(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Config file for this run, or `None` to use defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        let found = find_config(cwd);
        tracing::debug!(cwd = %cwd.display(), found = found.is_some(), "Searched for config");
        return Ok(found);
    };

    let path = if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    };
    if path.is_file() {
        Ok(Some(path))
    } else {
        Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        })
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
