//! # lgen-core — Typed Configuration Model
//!
//! The strongly typed in-memory model a load-generation engine consumes
//! once a configuration file has passed schema validation and reference
//! resolution:
//!
//! - [`Task`] — a reusable HTTP call template (method, endpoint, optional
//!   headers and payload).
//! - [`User`] — a named actor bound to an ordered list of shared task
//!   handles and an execution rate.
//! - [`Config`] — the root aggregate: connection target plus the task and
//!   user catalogs.
//!
//! ## Referential Integrity
//!
//! A user never owns a private copy of a task. `User::task_list` holds
//! `Arc<Task>` handles that point at the exact allocations stored in
//! `Config::task_dict`, and [`Config::new`] rejects any user holding a
//! handle that is not one of those allocations.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lgen-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The model is immutable after construction: fields are private and
//!   exposed through accessors only.

pub mod config;
pub mod error;
pub mod target;
pub mod task;
pub mod user;

pub use config::{Config, TaskCatalog, UserCatalog};
pub use error::ModelError;
pub use target::{HttpMethod, Scheme};
pub use task::{JsonMap, Task};
pub use user::{User, DEFAULT_RATE};
