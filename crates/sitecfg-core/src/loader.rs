//! Reading declarations from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assembler::assemble;
use crate::config::BuildConfig;
use crate::declaration::{ConfigShapeError, Declaration};

/// File names searched by [`discover`], in priority order.
pub const CONFIG_FILE_NAMES: [&str; 4] = ["site.toml", "site.json", "site.yaml", "site.yml"];

/// Supported declaration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Toml,
    Json,
    Yaml,
}

impl DeclarationFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(DeclarationFormat::Toml),
            "json" => Some(DeclarationFormat::Json),
            "yaml" | "yml" => Some(DeclarationFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a file's extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))
    }

    /// Parse a declaration in this format.
    pub fn parse(&self, source: &str) -> Result<Declaration, ConfigShapeError> {
        match self {
            DeclarationFormat::Toml => Declaration::from_toml_str(source),
            DeclarationFormat::Json => Declaration::from_json_str(source),
            DeclarationFormat::Yaml => Declaration::from_yaml_str(source),
        }
    }
}

/// Errors that can occur when loading a declaration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Unsupported config format: {0} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid config {path}: {source}")]
    Shape {
        path: String,
        source: ConfigShapeError,
    },

    #[error("No config file found in {0}")]
    NotFound(String),
}

/// Read and shape-check a declaration file.
pub fn load_declaration(path: &Path) -> Result<Declaration, LoadError> {
    let format = DeclarationFormat::from_path(path)?;
    tracing::debug!("Loading {:?} declaration from {}", format, path.display());

    let content = fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    format.parse(&content).map_err(|e| LoadError::Shape {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read a declaration file and assemble it.
pub fn load_config(path: &Path) -> Result<BuildConfig, LoadError> {
    let declaration = load_declaration(path)?;

    let config = assemble(&declaration).map_err(|e| LoadError::Shape {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Find the first well-known config file in a directory.
pub fn discover(dir: &Path) -> Result<PathBuf, LoadError> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| LoadError::NotFound(dir.display().to_string()))
}
