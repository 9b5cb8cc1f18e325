//! # lgen-config — Configuration Loading Pipeline
//!
//! Reads a JSON configuration file and produces a validated,
//! cross-referenced [`lgen_core::Config`]:
//!
//! ```text
//! path → bytes → serde_json::Value → schema check → task catalog → user catalog → Config
//! ```
//!
//! - [`load`] / [`ConfigLoader::load`] — the file entry point.
//! - [`parse`] / [`ConfigLoader::from_text`] — the same pipeline on
//!   in-memory text.
//! - [`build_config`] — the entity builder on its own, for documents that
//!   were validated elsewhere.
//!
//! ## Error Ordering
//!
//! Schema validation and entity building are separate passes. A document
//! that is both malformed and has dangling references reports the schema
//! violation, never the reference error.
//!
//! ## Crate Policy
//!
//! - Synchronous, single-threaded, no global state. Two loads of the same
//!   file produce equal values.
//! - The only side effect is the file read.

pub mod build;
pub mod error;
pub mod loader;

pub use build::build_config;
pub use error::{ConfigError, ErrorKind};
pub use loader::{load, parse, ConfigLoader, MEMORY_SOURCE};
