//! Build configuration assembler for static sites.
//!
//! Reads a declaration of site URL, output directory, output mode, HTML
//! compression and an ordered list of integrations, and assembles it into an
//! immutable [`BuildConfig`] for an external build pipeline.

pub mod assembler;
pub mod config;
pub mod declaration;
pub mod export;
pub mod loader;

pub use assembler::assemble;
pub use config::{BuildConfig, OutputMode, PluginHandle, SiteUrl};
pub use declaration::{ConfigShapeError, Declaration};
pub use export::{export, ExportError, ExportFormat};
pub use loader::{discover, load_config, load_declaration, DeclarationFormat, LoadError};
