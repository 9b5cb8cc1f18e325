//! # lgen-cli — Command-Line Interface
//!
//! Thin wrapper over `lgen-config`. No business logic lives here: handlers
//! call the loader and format its result.
//!
//! ## Subcommands
//!
//! - `lgen check <PATH>` — load a configuration (`-` for stdin) and print a
//!   summary, or a diagnostic naming the failure kind.
//! - `lgen schema` — print the JSON Schema contract.
//!
//! ## Exit Codes
//!
//! 0 on success, 1 when the configuration is rejected, 2 on operational
//! errors (unreadable stdin, broken stdout).

pub mod check;
pub mod schema;
