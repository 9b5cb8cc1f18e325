//! # Error Types — Configuration Loading
//!
//! One variant per failure kind of the load pipeline, in pipeline order.
//! Every kind stays distinct and inspectable so a caller can print a
//! friendly "file not found" message but a full diagnostic for a schema
//! violation.
//!
//! Nothing here is fatal to the process; the caller decides whether to
//! abort.

use std::path::PathBuf;

use lgen_core::ModelError;
use lgen_schema::SchemaValidationError;
use thiserror::Error;

/// Failure loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The path does not exist or is not a regular file.
    #[error("{} is not a file or does not exist", .path.display())]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The text is not well-formed JSON.
    #[error("failed to parse JSON in {}: {source}", .path.display())]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// Decoder diagnostic, including line and column.
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that violates the configuration schema.
    #[error(transparent)]
    Validation(#[from] SchemaValidationError),

    /// A user lists a task name that has no entry in the task catalog.
    #[error("user '{user}' references undefined task '{task}'")]
    UnresolvedTask {
        /// The user whose task list is broken.
        user: String,
        /// The missing task name.
        task: String,
    },

    /// A schema-valid document that could not be decoded into the typed
    /// model. Only reachable when the builder is handed unvalidated input.
    #[error("configuration decode error: {0}")]
    Decode(String),

    /// The built catalogs violated a model invariant.
    #[error("configuration model error: {0}")]
    Model(#[from] ModelError),
}

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    Io,
    Parse,
    Validation,
    Reference,
    Build,
}

impl ConfigError {
    /// Classify the error without destructuring it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Validation(_) => ErrorKind::Validation,
            Self::UnresolvedTask { .. } => ErrorKind::Reference,
            Self::Decode(_) | Self::Model(_) => ErrorKind::Build,
        }
    }
}
