//! Shared configuration loader for the sl toolchain.
//!
//! `defaults/sl.default.toml` is embedded into every binary so that the documented defaults
//! and the runtime behavior stay in sync. Applications layer user files and overrides on
//! top of those defaults via [`Loader`] before deserializing into [`SlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use sl_parser::sl::formats::RenderOptions;
use sl_parser::sl::lowering::LoweringOptions;
use std::path::Path;

pub use config::ConfigError as SlConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/sl.default.toml");

/// Top-level configuration consumed by sl applications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlConfig {
    pub lowering: LoweringConfig,
    pub render: RenderConfig,
}

/// Naming of the generated checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoweringConfig {
    pub check_prefix: String,
    pub bool_type: String,
}

/// Layout of the rendered declarations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    pub indent: String,
    pub blank_lines_between: usize,
}

impl From<&LoweringConfig> for LoweringOptions {
    fn from(config: &LoweringConfig) -> Self {
        LoweringOptions {
            check_prefix: config.check_prefix.clone(),
            bool_type: config.bool_type.clone(),
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            indent: config.indent.clone(),
            blank_lines_between: config.blank_lines_between,
        }
    }
}

impl SlConfig {
    pub fn lowering_options(&self) -> LoweringOptions {
        LoweringOptions::from(&self.lowering)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from(&self.render)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SlConfig, ConfigError> {
    Loader::new().build()
}
