//! Write a starter config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sitecfg_core::DeclarationFormat;

/// Run the init command.
///
/// The starter config is written in the format the path's extension names.
pub fn run(path: &Path, yes: bool) -> Result<()> {
    let format = DeclarationFormat::from_path(path)?;

    if path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, starter_config(format))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    tracing::info!("Run 'sitecfg check' to validate it.");

    Ok(())
}

fn starter_config(format: DeclarationFormat) -> &'static str {
    match format {
        DeclarationFormat::Toml => DEFAULT_TOML,
        DeclarationFormat::Json => DEFAULT_JSON,
        DeclarationFormat::Yaml => DEFAULT_YAML,
    }
}

const DEFAULT_TOML: &str = r#"# Site build configuration

# Canonical URL the site is deployed to
site = "https://godev.run/zero-share"

# Output directory for the built site
out_dir = "./build"

# "static", "server" or "hybrid"
output = "static"

# Compress generated HTML
compress_html = true

# Integrations run in the order listed
integrations = ["tailwind", "svelte", "service-worker"]

[vite]
plugins = []
"#;

const DEFAULT_JSON: &str = r#"{
  "site": "https://godev.run/zero-share",
  "outDir": "./build",
  "output": "static",
  "compressHTML": true,
  "integrations": ["tailwind", "svelte", "service-worker"],
  "vite": {
    "plugins": []
  }
}
"#;

const DEFAULT_YAML: &str = r#"# Site build configuration

# Canonical URL the site is deployed to
site: https://godev.run/zero-share

# Output directory for the built site
out_dir: ./build

# "static", "server" or "hybrid"
output: static

# Compress generated HTML
compress_html: true

# Integrations run in the order listed
integrations:
  - tailwind
  - svelte
  - service-worker

vite:
  plugins: []
"#;
