//! Configuration loading for the chx toolchain.
//!
//! `defaults/chx.default.toml` is embedded into the crate so documented defaults and runtime
//! behavior cannot drift. Callers layer their own files and overrides on top with
//! [`Loader`] before deserializing into [`ChxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/chx.default.toml");

/// Name of the per-project settings file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "chx.toml";

/// Top-level configuration consumed by chx applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ChxConfig {
    pub output: OutputConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the format printed when none is requested explicitly.
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Layers user configuration over the built-in defaults.
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

    /// Layer a configuration file. A missing file is an error at `build` time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `dir/chx.toml` if the directory has one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.with_optional_file(path)
    }

    /// Force the output format, as `--format` does. `None` leaves the layered value alone.
    pub fn with_format(self, format: Option<&str>) -> Result<Self, ConfigError> {
        match format {
            Some(format) => self.set_override("output.format", format),
            None => Ok(self),
        }
    }

    /// Apply a single key/value override, e.g. `output.format` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ChxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<ChxConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, "tree");
        assert!(config.json.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "prompt")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "prompt");
    }

    #[test]
    fn file_layers_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[json]\npretty = false").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert!(!config.json.pretty);
        assert_eq!(config.output.format, "tree");
    }

    #[test]
    fn local_file_is_found_in_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[output]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = Loader::new()
            .with_local_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(config.json.pretty);
    }

    #[test]
    fn local_file_is_optional() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_local_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "tree");
    }

    #[test]
    fn format_flag_wins_over_local_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[output]\nformat = \"json\"\n",
        )
        .expect("write config");

        let config = Loader::new()
            .with_local_file(dir.path())
            .with_format(Some("prompt"))
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "prompt");

        let config = Loader::new()
            .with_local_file(dir.path())
            .with_format(None)
            .expect("no override")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/chx.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/chx.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "tree");
    }
}
