//! Config validation command.

use std::path::PathBuf;

use anyhow::Result;

use super::resolve_config;

/// Run the check command.
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config)?;

    tracing::info!(
        "Config OK: {} output to {} with {} integrations",
        config.output_mode(),
        config.output_dir().display(),
        config.integrations().len()
    );

    Ok(())
}
