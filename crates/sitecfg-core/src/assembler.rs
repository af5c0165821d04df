//! Turns a declaration into a [`BuildConfig`].

use std::path::PathBuf;

use crate::config::{BuildConfig, OutputMode, SiteUrl};
use crate::declaration::{ConfigShapeError, Declaration};

const VITE: &str = "vite";

/// Assemble a declaration into an immutable build configuration.
///
/// Pure and one-shot: the same declaration always yields an equal config.
/// Integrations keep their declared order; nothing is defaulted or rewritten.
pub fn assemble(declaration: &Declaration) -> Result<BuildConfig, ConfigShapeError> {
    let site_url = SiteUrl::parse(&declaration.site)?;
    let output_mode: OutputMode = declaration.output.parse()?;

    let mut build_tool_options = declaration.build_tool_options.clone();
    if let Some(vite) = &declaration.vite {
        if build_tool_options.contains_key(VITE) {
            return Err(ConfigShapeError::DuplicateToolOptions(VITE.to_string()));
        }
        build_tool_options.insert(VITE.to_string(), vite.clone());
    }

    tracing::debug!(
        "Assembled {} config for {} with {} integrations",
        output_mode,
        site_url,
        declaration.integrations.len()
    );

    Ok(BuildConfig {
        site_url,
        output_dir: PathBuf::from(&declaration.out_dir),
        output_mode,
        compress_html: declaration.compress_html,
        integrations: declaration.integrations.clone(),
        build_tool_options,
    })
}
