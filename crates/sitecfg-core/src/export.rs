//! Rendering a [`BuildConfig`] as the default export document.
//!
//! The document uses the key names build pipelines expect (`site`, `outDir`,
//! `output`, `compressHTML`, `integrations`, `vite`) and can be loaded back
//! as a declaration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::config::{BuildConfig, OutputMode, PluginHandle, SiteUrl};

/// Output formats for the export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
        }
    }
}

/// Errors that can occur when rendering the export document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to render JSON: {0}")]
    Json(String),

    #[error("Failed to render TOML: {0}")]
    Toml(String),

    #[error("Cannot render TOML: {0} is null")]
    NullInToml(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    site: &'a SiteUrl,
    out_dir: &'a Path,
    output: OutputMode,
    #[serde(rename = "compressHTML")]
    compress_html: bool,
    integrations: &'a [PluginHandle],
    #[serde(skip_serializing_if = "Option::is_none")]
    vite: Option<&'a Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    build_tool_options: BTreeMap<&'a str, &'a Value>,
}

impl<'a> From<&'a BuildConfig> for ExportDocument<'a> {
    fn from(config: &'a BuildConfig) -> Self {
        let build_tool_options = config
            .build_tool_options()
            .iter()
            .filter(|(tool, options)| tool.as_str() != "vite" || options.is_null())
            .map(|(tool, options)| (tool.as_str(), options))
            .collect();

        Self {
            site: config.site_url(),
            out_dir: config.output_dir(),
            output: config.output_mode(),
            compress_html: config.compress_html(),
            integrations: config.integrations(),
            // a null `vite` would read back as absent
            vite: config.tool_options("vite").filter(|v| !v.is_null()),
            build_tool_options,
        }
    }
}

/// Render the export document for a config.
pub fn export(config: &BuildConfig, format: ExportFormat) -> Result<String, ExportError> {
    let document = ExportDocument::from(config);

    match format {
        ExportFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| ExportError::Json(e.to_string())),
        ExportFormat::Toml => {
            if let Some(field) = find_null_option(config) {
                return Err(ExportError::NullInToml(field));
            }
            toml::to_string(&document).map_err(|e| ExportError::Toml(e.to_string()))
        }
    }
}

/// Path of the first `null` inside plugin or tool options. TOML has no null.
fn find_null_option(config: &BuildConfig) -> Option<String> {
    let plugins = config
        .integrations()
        .iter()
        .enumerate()
        .filter_map(|(i, plugin)| {
            let options = plugin.options.as_ref()?;
            find_null(options, format!("integrations[{}].options", i))
        });

    let tools = config
        .build_tool_options()
        .iter()
        .filter_map(|(tool, options)| find_null(options, tool.clone()));

    plugins.chain(tools).next()
}

fn find_null(value: &Value, path: String) -> Option<String> {
    match value {
        Value::Null => Some(path),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_null(item, format!("{}[{}]", path, i))),
        Value::Object(map) => map
            .iter()
            .find_map(|(key, item)| find_null(item, format!("{}.{}", path, key))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::declaration::Declaration;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn zero_share() -> BuildConfig {
        let decl = Declaration::new("https://godev.run/zero-share", "./build", "static", true)
            .integration(PluginHandle::new("tailwind"))
            .integration(PluginHandle::new("svelte"))
            .integration(PluginHandle::with_options(
                "service-worker",
                json!({"workbox": {"skipWaiting": true}}),
            ))
            .tool_options("vite", json!({"plugins": []}));
        assemble(&decl).unwrap()
    }

    #[test]
    fn exports_json_with_original_keys() {
        let rendered = export(&zero_share(), ExportFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value,
            json!({
                "site": "https://godev.run/zero-share",
                "outDir": "./build",
                "output": "static",
                "compressHTML": true,
                "integrations": [
                    {"name": "tailwind"},
                    {"name": "svelte"},
                    {"name": "service-worker", "options": {"workbox": {"skipWaiting": true}}},
                ],
                "vite": {"plugins": []},
            })
        );
    }

    #[test]
    fn json_export_loads_back() {
        let config = zero_share();
        let rendered = export(&config, ExportFormat::Json).unwrap();

        let reloaded = assemble(&Declaration::from_json_str(&rendered).unwrap()).unwrap();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn toml_export_loads_back() {
        let config = zero_share();
        let rendered = export(&config, ExportFormat::Toml).unwrap();

        let reloaded = assemble(&Declaration::from_toml_str(&rendered).unwrap()).unwrap();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn exports_other_tools_under_build_tool_options() {
        let decl = Declaration::new("https://example.com", "dist", "hybrid", false)
            .tool_options("esbuild", json!({"target": "es2020"}));
        let config = assemble(&decl).unwrap();

        let rendered = export(&config, ExportFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["buildToolOptions"], json!({"esbuild": {"target": "es2020"}}));
        assert!(value.get("vite").is_none());
    }

    #[test]
    fn toml_export_names_null_option() {
        let decl = Declaration::new("https://example.com", "./build", "static", true)
            .integration(PluginHandle::new("tailwind"))
            .integration(PluginHandle::with_options(
                "service-worker",
                json!({"workbox": {"navigateFallback": null}}),
            ));
        let config = assemble(&decl).unwrap();

        let err = export(&config, ExportFormat::Toml).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot render TOML: integrations[1].options.workbox.navigateFallback is null"
        );
        assert!(export(&config, ExportFormat::Json).is_ok());
    }

    #[test]
    fn toml_export_names_null_tool_option() {
        let decl = Declaration::new("https://example.com", "./build", "static", true)
            .tool_options("vite", json!({"plugins": [null]}));
        let config = assemble(&decl).unwrap();

        let err = export(&config, ExportFormat::Toml).unwrap_err();

        assert!(matches!(err, ExportError::NullInToml(ref field) if field == "vite.plugins[0]"));
    }

    #[test]
    fn null_options_round_trip() {
        let decl = Declaration::new("https://example.com", "./build", "static", true)
            .integration(PluginHandle::with_options("svelte", Value::Null))
            .tool_options("vite", Value::Null);
        let config = assemble(&decl).unwrap();

        let rendered = export(&config, ExportFormat::Json).unwrap();
        let reloaded = assemble(&Declaration::from_json_str(&rendered).unwrap()).unwrap();

        assert_eq!(reloaded, config);
    }
}
