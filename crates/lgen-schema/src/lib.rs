//! # lgen-schema — Configuration Schema Contract
//!
//! Structural validation of decoded lgen configuration documents.
//!
//! ## Runtime Validation (`validate`)
//!
//! The contract lives in `schemas/config.schema.json` (JSON Schema
//! Draft 7) and is embedded at compile time. Key items:
//!
//! - [`SchemaValidator::new`] — compiles the embedded contract.
//! - [`SchemaValidator::validate`] — checks a `serde_json::Value` and
//!   returns every violation with its JSON Pointer path; the first one is
//!   the primary diagnostic.
//! - [`CONFIG_SCHEMA_JSON`] — the raw contract text, for tooling that
//!   wants to publish it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lgen-*` crates. Validation knows nothing
//!   about the typed model; it only decides whether a document may be
//!   handed to the entity builder.
//! - The schema is the portable contract. Any change to it must keep the
//!   typed decoder in `lgen-config` total over schema-valid input.

pub mod validate;

pub use validate::{
    config_schema, SchemaValidationError, SchemaValidator, ValidationViolations, Violation,
    CONFIG_SCHEMA_JSON, CONFIG_SCHEMA_NAME,
};
