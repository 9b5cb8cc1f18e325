//! # Config — Root Aggregate
//!
//! Connection target plus the task and user catalogs.
//!
//! ## Invariant
//!
//! Every task reachable from any `User::task_list` is the same allocation
//! as the `task_dict` entry of that name. [`Config::new`] checks this with
//! `Arc::ptr_eq`; since the aggregate is immutable afterwards, the
//! guarantee holds for its whole lifetime.
//!
//! Catalogs are `BTreeMap`s so iteration order is deterministic and two
//! loads of the same document compare and print identically.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ModelError;
use crate::target::Scheme;
use crate::task::Task;
use crate::user::User;

/// Task catalog keyed by task name.
pub type TaskCatalog = BTreeMap<String, Arc<Task>>;

/// User catalog keyed by user name.
pub type UserCatalog = BTreeMap<String, User>;

/// A validated, cross-referenced load-generation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    host: String,
    port: u16,
    scheme: Scheme,
    task_dict: TaskCatalog,
    user_dict: UserCatalog,
}

impl Config {
    /// Assemble a configuration from already-built catalogs.
    ///
    /// # Errors
    ///
    /// - [`ModelError::KeyMismatch`] if a catalog key differs from the name
    ///   stored on its entity.
    /// - [`ModelError::DetachedTask`] if a user holds a task handle that is
    ///   not the catalog's allocation for that name.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        scheme: Scheme,
        task_dict: TaskCatalog,
        user_dict: UserCatalog,
    ) -> Result<Self, ModelError> {
        for (key, task) in &task_dict {
            check_key(key, task.name())?;
        }

        for (key, user) in &user_dict {
            check_key(key, user.name())?;
            for task in user.task_list() {
                let attached = task_dict
                    .get(task.name())
                    .is_some_and(|entry| Arc::ptr_eq(entry, task));
                if !attached {
                    return Err(ModelError::DetachedTask {
                        user: user.name().to_string(),
                        task: task.name().to_string(),
                    });
                }
            }
        }

        Ok(Self {
            host: host.into(),
            port,
            scheme,
            task_dict,
            user_dict,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn task_dict(&self) -> &TaskCatalog {
        &self.task_dict
    }

    pub fn user_dict(&self) -> &UserCatalog {
        &self.user_dict
    }

    /// Look up a task by name. Absent names yield `None`, not an error.
    pub fn get_task(&self, name: &str) -> Option<&Arc<Task>> {
        self.task_dict.get(name)
    }

    pub fn get_user(&self, name: &str) -> Option<&User> {
        self.user_dict.get(name)
    }

    /// `scheme://host:port`, the base every task endpoint is joined to.
    ///
    /// IPv6 literals are bracketed.
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

fn check_key(key: &str, name: &str) -> Result<(), ModelError> {
    if key == name {
        Ok(())
    } else {
        Err(ModelError::KeyMismatch {
            key: key.to_string(),
            name: name.to_string(),
        })
    }
}
