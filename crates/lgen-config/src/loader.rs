//! # Config Loader
//!
//! Entry point of the pipeline:
//!
//! 1. The path must name an existing regular file, else
//!    [`ConfigError::FileNotFound`]. Directories count as not found.
//! 2. The bytes are decoded as JSON, else [`ConfigError::Parse`]. Invalid
//!    UTF-8 is a parse error too.
//! 3. The document is checked against the schema contract, else
//!    [`ConfigError::Validation`].
//! 4. Tasks then users are built, else [`ConfigError::UnresolvedTask`].
//!
//! Every stage is fail-fast; the caller never observes a half-built
//! [`Config`]. The loader keeps no state between calls other than the one
//! result it owns.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lgen_core::{Config, Task};
use lgen_schema::SchemaValidator;
use serde_json::Value;

use crate::build::build_config;
use crate::error::ConfigError;

/// Path recorded for configurations parsed from in-memory text.
pub const MEMORY_SOURCE: &str = "<memory>";

/// A loaded configuration together with the path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLoader {
    path: PathBuf,
    config: Config,
}

impl ConfigLoader {
    /// Load and validate the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] variant of the first stage that fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), "reading configuration");
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_bytes(path.to_path_buf(), &bytes)
    }

    /// Run the pipeline on in-memory JSON text.
    ///
    /// # Errors
    ///
    /// As [`ConfigLoader::load`], minus the file-system stages.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Self::from_bytes(PathBuf::from(MEMORY_SOURCE), text.as_bytes())
    }

    fn from_bytes(path: PathBuf, bytes: &[u8]) -> Result<Self, ConfigError> {
        let document: Value = match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(source) => return Err(ConfigError::Parse { path, source }),
        };

        let validator = SchemaValidator::new()?;
        validator.validate(&document)?;
        tracing::debug!(path = %path.display(), "configuration passed schema validation");

        let config = build_config(document)?;
        tracing::info!(
            path = %path.display(),
            base_url = %config.base_url(),
            tasks = config.task_dict().len(),
            users = config.user_dict().len(),
            "loaded configuration"
        );

        Ok(Self { path, config })
    }

    /// The file the configuration was read from, or [`MEMORY_SOURCE`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a task by name. Absent names yield `None`; this is a
    /// convenience accessor, not the strict build-time resolution.
    pub fn get_task(&self, name: &str) -> Option<&Arc<Task>> {
        self.config.get_task(name)
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Load the configuration file at `path`.
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    ConfigLoader::load(path).map(ConfigLoader::into_config)
}

/// Parse a configuration from JSON text.
///
/// # Errors
///
/// See [`ConfigLoader::from_text`].
pub fn parse(text: &str) -> Result<Config, ConfigError> {
    ConfigLoader::from_text(text).map(ConfigLoader::into_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const EXAMPLE: &str = r#"{"host":"h","port":80,"scheme":"http","tasks":{"a":{"method":"GET","endpoint":"/a"},"b":{"method":"POST","endpoint":"/b"}},"users":{"u1":{"tasks":["a","b"],"rate":2}}}"#;

    #[test]
    fn from_text_records_memory_source() {
        let loader = ConfigLoader::from_text(EXAMPLE).unwrap();
        assert_eq!(loader.path(), Path::new(MEMORY_SOURCE));
        assert_eq!(loader.config().user_dict().len(), 1);
    }

    #[test]
    fn get_task_returns_none_for_unknown_name() {
        let loader = ConfigLoader::from_text(EXAMPLE).unwrap();
        assert_eq!(loader.get_task("a").unwrap().endpoint(), "/a");
        assert!(loader.get_task("zzz").is_none());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        for text in ["{", r#"{"host": "h",}"#, "", "// comment\n{}"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "input {text:?} gave {err}");
        }
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let err = ConfigLoader::from_bytes(PathBuf::from("x"), b"{\"host\": \"\xff\"}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn schema_errors_win_over_reference_errors() {
        // Dangling reference "c" and an out-of-range port: the schema pass
        // runs first, so the port is reported.
        let text = EXAMPLE.replace(r#""port":80"#, r#""port":70000"#).replace(
            r#"["a","b"]"#,
            r#"["a","c"]"#,
        );
        let err = parse(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "got {err}");
    }

    #[test]
    fn dangling_reference_is_reference_error() {
        let text = EXAMPLE.replace(r#"["a","b"]"#, r#"["a","c"]"#);
        let err = parse(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Reference);
        let msg = err.to_string();
        assert!(msg.contains("u1") && msg.contains("'c'"), "message: {msg}");
    }
}
