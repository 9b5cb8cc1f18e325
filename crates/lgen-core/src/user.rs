//! # User — Named Actor Bound to Tasks
//!
//! A user exercises an ordered list of tasks at a configured rate. The
//! list holds shared handles into the task catalog; the same task may
//! appear more than once, and order is significant.
//!
//! The meaning of `rate` (requests per second, iterations per minute, ...)
//! belongs to the execution engine. The model only guarantees it is a
//! finite, non-negative number.

use std::sync::Arc;

use crate::error::ModelError;
use crate::task::Task;

/// Rate assigned to a user whose configuration omits one.
pub const DEFAULT_RATE: f64 = 1.0;

/// A named actor with an ordered task list and an execution rate.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    name: String,
    task_list: Vec<Arc<Task>>,
    rate: f64,
}

impl User {
    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRate`] if `rate` is negative, NaN, or
    /// infinite.
    pub fn new(
        name: impl Into<String>,
        task_list: Vec<Arc<Task>>,
        rate: f64,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if !rate.is_finite() || rate < 0.0 {
            return Err(ModelError::InvalidRate { user: name, rate });
        }
        Ok(Self {
            name,
            task_list,
            rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tasks in configuration order, duplicates included.
    pub fn task_list(&self) -> &[Arc<Task>] {
        &self.task_list
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Names of the referenced tasks, in order.
    pub fn task_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.task_list.iter().map(|t| t.name())
    }
}
