//! # Entity Builder
//!
//! Turns a schema-valid document into the typed model in two ordered
//! steps:
//!
//! 1. **Tasks.** One [`Task`] per entry of the raw `tasks` object, named by
//!    its key. Missing `headers`/`payload` stay `None`. This step is total.
//! 2. **Users.** Each name in a user's `tasks` array is resolved against the
//!    task catalog by exact match, in array order, duplicates kept. The
//!    first name with no catalog entry aborts the build with
//!    [`ConfigError::UnresolvedTask`]; partial catalogs are dropped.
//!
//! The raw document is decoded into private serde structs first. Unknown
//! fields are ignored, matching the schema, which only constrains the
//! fields it names.

use std::collections::BTreeMap;
use std::sync::Arc;

use lgen_core::{
    Config, HttpMethod, JsonMap, Scheme, Task, TaskCatalog, User, UserCatalog, DEFAULT_RATE,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    host: String,
    #[serde(deserialize_with = "deserialize_port")]
    port: u16,
    scheme: Scheme,
    tasks: BTreeMap<String, RawTask>,
    users: BTreeMap<String, RawUser>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTask {
    method: HttpMethod,
    endpoint: String,
    headers: Option<JsonMap>,
    payload: Option<JsonMap>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    tasks: Vec<String>,
    rate: Option<f64>,
}

/// JSON Schema treats `80.0` as an integer, so the decoder must too.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    n.as_u64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| D::Error::custom(format!("port {n} is not an integer in 0..=65535")))
}

/// Build the task catalog. Cannot fail on decoded input.
pub(crate) fn build_tasks(raw: BTreeMap<String, RawTask>) -> TaskCatalog {
    raw.into_iter()
        .map(|(name, t)| {
            let task = Task::new(name.clone(), t.method, t.endpoint)
                .with_headers(t.headers)
                .with_payload(t.payload);
            (name, Arc::new(task))
        })
        .collect()
}

/// Build the user catalog, resolving every task reference against `tasks`.
///
/// # Errors
///
/// Returns [`ConfigError::UnresolvedTask`] for the first referenced name
/// with no catalog entry.
pub(crate) fn build_users(
    raw: BTreeMap<String, RawUser>,
    tasks: &TaskCatalog,
) -> Result<UserCatalog, ConfigError> {
    let mut users = UserCatalog::new();
    for (name, u) in raw {
        let task_list = resolve_tasks(&name, &u.tasks, tasks)?;
        let user = User::new(name.clone(), task_list, u.rate.unwrap_or(DEFAULT_RATE))?;
        users.insert(name, user);
    }
    Ok(users)
}

fn resolve_tasks(
    user: &str,
    names: &[String],
    tasks: &TaskCatalog,
) -> Result<Vec<Arc<Task>>, ConfigError> {
    names
        .iter()
        .map(|name| {
            tasks
                .get(name)
                .map(Arc::clone)
                .ok_or_else(|| ConfigError::UnresolvedTask {
                    user: user.to_string(),
                    task: name.clone(),
                })
        })
        .collect()
}

/// Build a [`Config`] from a schema-valid document.
///
/// # Errors
///
/// - [`ConfigError::Decode`] if `document` does not have the shape the
///   schema guarantees (i.e. validation was skipped).
/// - [`ConfigError::UnresolvedTask`] on a dangling task reference.
pub fn build_config(document: Value) -> Result<Config, ConfigError> {
    let raw: RawConfig =
        serde_json::from_value(document).map_err(|e| ConfigError::Decode(e.to_string()))?;

    let task_dict = build_tasks(raw.tasks);
    tracing::trace!(tasks = task_dict.len(), "built task catalog");

    let user_dict = build_users(raw.users, &task_dict)?;
    tracing::trace!(users = user_dict.len(), "built user catalog");

    Ok(Config::new(raw.host, raw.port, raw.scheme, task_dict, user_dict)?)
}
