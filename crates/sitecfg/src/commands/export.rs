//! Export document command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sitecfg_core::{export, ExportFormat};

use super::resolve_config;

/// Run the export command.
pub fn run(config: Option<PathBuf>, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(config)?;
    let rendered = export(&config, format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} export to {}", format.extension(), path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecfg_core::{assemble, Declaration};
    use tempfile::tempdir;

    #[test]
    fn writes_export_to_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(
            &config_path,
            r#"
site = "https://example.com"
out_dir = "./build"
output = "static"
compress_html = true
integrations = ["X", "Y", "Z"]
"#,
        )
        .unwrap();
        let out = temp.path().join("out").join("site.config.json");

        run(Some(config_path), ExportFormat::Json, Some(out.clone())).unwrap();

        let rendered = fs::read_to_string(&out).unwrap();
        let reloaded = assemble(&Declaration::from_json_str(&rendered).unwrap()).unwrap();
        let names: Vec<&str> = reloaded
            .integrations()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn fails_on_invalid_config() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.json");
        fs::write(
            &config_path,
            r#"{"site": 7, "out_dir": "./build", "output": "static", "compress_html": true}"#,
        )
        .unwrap();

        let result = run(Some(config_path), ExportFormat::Json, None);

        assert!(result.is_err());
    }
}
