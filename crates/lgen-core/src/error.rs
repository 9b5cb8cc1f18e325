//! # Error Types — Model Construction
//!
//! Errors raised while constructing the typed model directly. Loading a
//! configuration file has its own taxonomy in `lgen-config`; these cover
//! the invariants the model enforces on its own.

use thiserror::Error;

/// Error constructing or parsing a model value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// An HTTP method outside the supported set.
    #[error("unsupported HTTP method '{0}' (expected GET or POST)")]
    UnknownMethod(String),

    /// A URL scheme outside the supported set.
    #[error("unsupported scheme '{0}' (expected http or https)")]
    UnknownScheme(String),

    /// A user rate that is negative or not a finite number.
    #[error("user '{user}' has invalid rate {rate}: must be a finite number >= 0")]
    InvalidRate {
        /// Name of the offending user.
        user: String,
        /// The rejected rate.
        rate: f64,
    },

    /// A user holds a task handle that is not an entry of the task catalog.
    #[error("user '{user}' references task '{task}' which is not an entry of the task catalog")]
    DetachedTask {
        /// Name of the offending user.
        user: String,
        /// Name of the task the handle points at.
        task: String,
    },

    /// A catalog key disagrees with the name stored on the entity.
    #[error("catalog key '{key}' does not match entity name '{name}'")]
    KeyMismatch {
        /// The map key.
        key: String,
        /// The name stored on the entity.
        name: String,
    },
}
