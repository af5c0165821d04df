//! CLI subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use sitecfg_core::{discover, load_config, BuildConfig};

pub mod check;
pub mod export;
pub mod init;
pub mod show;

/// Load the config from an explicit path, or discover it in the current directory.
pub fn resolve_config(path: Option<PathBuf>) -> Result<BuildConfig> {
    let path = match path {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            discover(&cwd)?
        }
    };

    Ok(load_config(&path)?)
}
