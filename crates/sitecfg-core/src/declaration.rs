//! The literal configuration declaration, before assembly.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::config::PluginHandle;

/// Configuration fields as declared.
///
/// Field names follow the snake_case spelling; the camelCase keys used by
/// JavaScript site configs (`outDir`, `compressHTML`, ...) are accepted as
/// aliases. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    /// Canonical site URL
    #[serde(alias = "site_url", alias = "siteURL")]
    pub site: String,

    /// Output directory, relative to the project root
    #[serde(alias = "outDir", alias = "output_directory", alias = "outputDirectory")]
    pub out_dir: String,

    /// Output mode: "static", "server" or "hybrid"
    #[serde(alias = "output_mode", alias = "outputMode")]
    pub output: String,

    /// Compress generated HTML
    #[serde(alias = "compressHTML")]
    pub compress_html: bool,

    /// Integrations, in the order their hooks should run
    #[serde(default)]
    pub integrations: Vec<PluginHandle>,

    /// Options keyed by build tool name
    #[serde(default, alias = "buildToolOptions")]
    pub build_tool_options: BTreeMap<String, Value>,

    /// Shorthand for `build_tool_options.vite`
    #[serde(default)]
    pub vite: Option<Value>,
}

impl Declaration {
    /// Declare the required fields, with no integrations or tool options.
    pub fn new(
        site: impl Into<String>,
        out_dir: impl Into<String>,
        output: impl Into<String>,
        compress_html: bool,
    ) -> Self {
        Self {
            site: site.into(),
            out_dir: out_dir.into(),
            output: output.into(),
            compress_html,
            integrations: Vec::new(),
            build_tool_options: BTreeMap::new(),
            vite: None,
        }
    }

    /// Append an integration after those already declared.
    pub fn integration(mut self, plugin: PluginHandle) -> Self {
        self.integrations.push(plugin);
        self
    }

    /// Set the options for one build tool.
    pub fn tool_options(mut self, tool: impl Into<String>, options: Value) -> Self {
        self.build_tool_options.insert(tool.into(), options);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigShapeError> {
        toml::from_str(source).map_err(|e| ConfigShapeError::Malformed(e.message().to_string()))
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigShapeError> {
        serde_json::from_str(source).map_err(|e| ConfigShapeError::Malformed(e.to_string()))
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigShapeError> {
        serde_yaml::from_str(source).map_err(|e| ConfigShapeError::Malformed(e.to_string()))
    }

    /// Shape-check an already-parsed value.
    pub fn from_value(value: Value) -> Result<Self, ConfigShapeError> {
        serde_json::from_value(value).map_err(|e| ConfigShapeError::Malformed(e.to_string()))
    }
}

/// The declared shape does not match the expected fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigShapeError {
    #[error("Malformed configuration: {0}")]
    Malformed(String),

    #[error("Invalid output mode {0:?}: expected one of \"static\", \"server\", \"hybrid\"")]
    InvalidOutputMode(String),

    #[error("Invalid site URL {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    #[error("Options for build tool {0:?} declared twice")]
    DuplicateToolOptions(String),
}
