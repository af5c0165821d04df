//! The assembled build configuration and its value types.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use url::Url;

use crate::declaration::ConfigShapeError;

/// How the external build pipeline should emit the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Prerender every page at build time
    Static,

    /// Render every page on request
    Server,

    /// Prerender by default, opt individual pages into server rendering
    Hybrid,
}

impl OutputMode {
    /// All accepted modes, in declaration order.
    pub const ALL: [OutputMode; 3] = [OutputMode::Static, OutputMode::Server, OutputMode::Hybrid];

    /// The declared spelling of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Static => "static",
            OutputMode::Server => "server",
            OutputMode::Hybrid => "hybrid",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ConfigShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigShapeError::InvalidOutputMode(s.to_string()))
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical site URL.
///
/// Keeps the declared text exactly as written; the parsed form is only used
/// for checking that the URL is absolute and for deriving the base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    raw: String,
    parsed: Url,
}

impl SiteUrl {
    /// Parse an absolute URL with a host.
    pub fn parse(raw: &str) -> Result<Self, ConfigShapeError> {
        let parsed = Url::parse(raw).map_err(|e| ConfigShapeError::InvalidSiteUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(ConfigShapeError::InvalidSiteUrl {
                url: raw.to_string(),
                reason: "must be an absolute URL with a host".to_string(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The URL as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    pub fn url(&self) -> &Url {
        &self.parsed
    }

    /// Path component the site is served under, e.g. `/zero-share` for
    /// `https://godev.run/zero-share`. Returns `/` for a bare origin.
    pub fn base_path(&self) -> &str {
        let path = self.parsed.path().trim_end_matches('/');
        if path.is_empty() {
            "/"
        } else {
            path
        }
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for SiteUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Opaque reference to a build-time integration.
///
/// The assembler never looks inside `options`; they are handed to the
/// pipeline as declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginHandle {
    /// Integration name (e.g., "tailwind")
    pub name: String,

    /// Static options passed through to the integration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl PluginHandle {
    /// Activate an integration with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    /// Activate an integration with options. `null` options count as none.
    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options: (!options.is_null()).then_some(options),
        }
    }
}

/// Table form of an integration: `{ name, options }`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PluginTable {
    name: String,
    #[serde(default)]
    options: Option<Value>,
}

/// Integrations may be declared as a bare name or as a table.
impl<'de> Deserialize<'de> for PluginHandle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PluginVisitor)
    }
}

struct PluginVisitor;

impl<'de> Visitor<'de> for PluginVisitor {
    type Value = PluginHandle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integration name or a { name, options } table")
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<PluginHandle, E> {
        Ok(PluginHandle::new(name))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<PluginHandle, A::Error> {
        let table = PluginTable::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(PluginHandle {
            name: table.name,
            options: table.options,
        })
    }
}

/// Immutable configuration consumed by the external build pipeline.
///
/// Only [`crate::assemble`] constructs one.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub(crate) site_url: SiteUrl,
    pub(crate) output_dir: PathBuf,
    pub(crate) output_mode: OutputMode,
    pub(crate) compress_html: bool,
    pub(crate) integrations: Vec<PluginHandle>,
    pub(crate) build_tool_options: BTreeMap<String, Value>,
}

impl BuildConfig {
    pub fn site_url(&self) -> &SiteUrl {
        &self.site_url
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn compress_html(&self) -> bool {
        self.compress_html
    }

    /// Integrations in declaration order.
    pub fn integrations(&self) -> &[PluginHandle] {
        &self.integrations
    }

    /// Options keyed by build tool name (e.g., "vite").
    pub fn build_tool_options(&self) -> &BTreeMap<String, Value> {
        &self.build_tool_options
    }

    /// Options for a single build tool.
    pub fn tool_options(&self, tool: &str) -> Option<&Value> {
        self.build_tool_options.get(tool)
    }
}
