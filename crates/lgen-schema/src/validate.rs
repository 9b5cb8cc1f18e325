//! # Schema Validation
//!
//! Runtime validation of decoded configuration documents against the
//! JSON Schema contract (Draft 7) in `schemas/config.schema.json`.
//!
//! ## Trust Boundary
//!
//! Schema validation is the first pass over untrusted input. Documents that
//! fail are rejected with structured violations carrying the instance path,
//! the schema path, and a human-readable message. Entity building only ever
//! sees documents that passed, so type and shape errors are always reported
//! before reference errors.
//!
//! ## Schema Resolution
//!
//! The contract is self-contained. A local retriever refuses every external
//! `$ref`, so compiling a schema never touches the network or the file
//! system.

use std::fmt;

use jsonschema::{Retrieve, Uri, ValidationOptions, Validator};
use serde_json::Value;
use thiserror::Error;

/// Name reported for the embedded configuration schema.
pub const CONFIG_SCHEMA_NAME: &str = "config.schema.json";

/// Raw text of the embedded configuration schema.
pub const CONFIG_SCHEMA_JSON: &str = include_str!("../schemas/config.schema.json");

/// Retriever that resolves nothing.
///
/// Installed on every validator so an unexpected `$ref` fails compilation
/// instead of triggering an HTTP or file fetch.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external schema reference '{}' is not permitted", uri.as_str()).into())
    }
}

/// Error during schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations, first one primary.
        violations: ValidationViolations,
    },

    /// The schema text could not be parsed.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoadError {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

impl SchemaValidationError {
    /// The violations, if this is a `ValidationFailed` error.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations, in the order the validator
/// reported them. Never empty when carried by an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// The primary diagnostic: the first violation found.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Every violation, in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Parse the embedded configuration schema.
///
/// # Errors
///
/// Returns `SchemaValidationError::SchemaLoadError` if the embedded text is
/// not valid JSON.
pub fn config_schema() -> Result<Value, SchemaValidationError> {
    serde_json::from_str(CONFIG_SCHEMA_JSON).map_err(|e| SchemaValidationError::SchemaLoadError {
        schema_name: CONFIG_SCHEMA_NAME.to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}

/// A compiled schema validator backed by the `jsonschema` crate.
///
/// ## Thread Safety
///
/// `SchemaValidator` is `Send + Sync`; a compiled validator can be shared
/// across threads. Compilation happens once at construction.
pub struct SchemaValidator {
    /// Name reported in errors.
    schema_name: String,
    validator: Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Compile the embedded configuration schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` or `ValidatorBuildError` only if the
    /// embedded schema itself is broken.
    pub fn new() -> Result<Self, SchemaValidationError> {
        Self::from_schema(CONFIG_SCHEMA_NAME, &config_schema()?)
    }

    /// Compile an arbitrary schema value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidatorBuildError` if the schema
    /// is invalid or references an external document.
    pub fn from_schema(
        schema_name: impl Into<String>,
        schema: &Value,
    ) -> Result<Self, SchemaValidationError> {
        let schema_name = schema_name.into();
        let validator = build_options().build(schema).map_err(|e| {
            SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            schema_name,
            validator,
        })
    }

    /// Returns the name reported in errors.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Cheap yes/no check without collecting violations.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// Validate a decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` with structured
    /// violation details if the document is invalid.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let errors: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.schema_name.clone(),
                violations: ValidationViolations { violations: errors },
            })
        }
    }
}

/// Draft 7 options with the offline retriever installed.
fn build_options() -> ValidationOptions {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft7);
    opts.with_retriever(OfflineRetriever);
    opts
}
