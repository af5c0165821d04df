//! Config summary command.

use std::path::PathBuf;

use anyhow::Result;
use sitecfg_core::BuildConfig;

use super::resolve_config;

/// Run the show command.
pub fn run(config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config)?;
    print!("{}", summarize(&config));
    Ok(())
}

/// Human-readable summary, integrations listed in run order.
fn summarize(config: &BuildConfig) -> String {
    let mut lines = vec![
        format!("site:          {}", config.site_url()),
        format!("base path:     {}", config.site_url().base_path()),
        format!("output:        {}", config.output_mode()),
        format!("out dir:       {}", config.output_dir().display()),
        format!("compress html: {}", config.compress_html()),
    ];

    if config.integrations().is_empty() {
        lines.push("integrations:  (none)".to_string());
    } else {
        lines.push("integrations:".to_string());
        for (i, plugin) in config.integrations().iter().enumerate() {
            let suffix = if plugin.options.is_some() {
                " (with options)"
            } else {
                ""
            };
            lines.push(format!("  {}. {}{}", i + 1, plugin.name, suffix));
        }
    }

    for tool in config.build_tool_options().keys() {
        lines.push(format!("tool options:  {}", tool));
    }

    lines.join("\n") + "\n"
}
