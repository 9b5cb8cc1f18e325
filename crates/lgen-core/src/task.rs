//! # Task — Reusable HTTP Call Template
//!
//! A task names one HTTP request shape. Headers and payload are optional
//! and keep the distinction between "absent" (`None`) and "present but
//! empty" (`Some` of an empty map): a downstream engine sends no body for
//! the former and an empty JSON object for the latter.

use serde_json::{Map, Value};

use crate::target::HttpMethod;

/// Object of arbitrary JSON values, as written in the configuration file.
pub type JsonMap = Map<String, Value>;

/// A named, immutable HTTP call template.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    name: String,
    method: HttpMethod,
    endpoint: String,
    headers: Option<JsonMap>,
    payload: Option<JsonMap>,
}

impl Task {
    /// Create a task with no headers and no payload.
    pub fn new(name: impl Into<String>, method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            endpoint: endpoint.into(),
            headers: None,
            payload: None,
        }
    }

    /// Attach a header map. `None` leaves the task without headers.
    pub fn with_headers(mut self, headers: Option<JsonMap>) -> Self {
        self.headers = headers;
        self
    }

    /// Attach a payload map. `None` leaves the task without a body.
    pub fn with_payload(mut self, payload: Option<JsonMap>) -> Self {
        self.payload = payload;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path or URL the request targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn headers(&self) -> Option<&JsonMap> {
        self.headers.as_ref()
    }

    pub fn payload(&self) -> Option<&JsonMap> {
        self.payload.as_ref()
    }

    pub fn has_headers(&self) -> bool {
        self.headers.is_some()
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}
