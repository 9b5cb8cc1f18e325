//! # Check Subcommand
//!
//! Loads a configuration through the full pipeline and reports either a
//! summary of the built model or the failure, labelled by kind so a missing
//! file reads differently from a schema violation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use lgen_config::{ConfigError, ConfigLoader, ErrorKind};
use lgen_core::{Config, HttpMethod};

/// Output format for the summary.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the `lgen check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file to load; `-` reads standard input.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Summary format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report of a loaded configuration. Describes the model; it is not a
/// re-serialization of the input file.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub source: String,
    pub target: String,
    pub tasks: Vec<TaskSummary>,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct TaskSummary {
    pub name: String,
    pub method: HttpMethod,
    pub endpoint: String,
    pub header_count: Option<usize>,
    pub has_payload: bool,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub rate: f64,
    pub tasks: Vec<String>,
}

impl ConfigSummary {
    pub fn new(source: impl Into<String>, config: &Config) -> Self {
        let tasks = config
            .task_dict()
            .values()
            .map(|t| TaskSummary {
                name: t.name().to_string(),
                method: t.method(),
                endpoint: t.endpoint().to_string(),
                header_count: t.headers().map(|h| h.len()),
                has_payload: t.has_payload(),
            })
            .collect();
        let users = config
            .user_dict()
            .values()
            .map(|u| UserSummary {
                name: u.name().to_string(),
                rate: u.rate(),
                tasks: u.task_names().map(str::to_string).collect(),
            })
            .collect();
        Self {
            source: source.into(),
            target: config.base_url(),
            tasks,
            users,
        }
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let mut out = format!("OK: {}\n  target: {}\n", self.source, self.target);
        out.push_str(&format!("  tasks: {}\n", self.tasks.len()));
        for t in &self.tasks {
            out.push_str(&format!("    {:<16} {:<4} {}", t.name, t.method, t.endpoint));
            if let Some(n) = t.header_count {
                out.push_str(&format!(" headers={n}"));
            }
            if t.has_payload {
                out.push_str(" +payload");
            }
            out.push('\n');
        }
        out.push_str(&format!("  users: {}\n", self.users.len()));
        for u in &self.users {
            out.push_str(&format!(
                "    {:<16} rate={} tasks=[{}]\n",
                u.name,
                u.rate,
                u.tasks.join(", ")
            ));
        }
        out
    }
}

/// Short label for a failure kind, shown before the diagnostic.
pub fn kind_label(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::FileNotFound => "not found",
        ErrorKind::Io => "unreadable",
        ErrorKind::Parse => "invalid JSON",
        ErrorKind::Validation => "schema violation",
        ErrorKind::Reference => "undefined task",
        ErrorKind::Build => "invalid model",
    }
}

/// One-block diagnostic for a rejected configuration. Schema rejections
/// also state how many violations were found.
pub fn render_failure(err: &ConfigError) -> String {
    let label = kind_label(err.kind());
    match err {
        ConfigError::Validation(inner) => match inner.violations() {
            Some(v) => format!("FAIL [{label}, {} found]: {err}", v.violations().len()),
            None => format!("FAIL [{label}]: {err}"),
        },
        _ => format!("FAIL [{label}]: {err}"),
    }
}

/// Load according to `args`, reading stdin for `-`.
///
/// The outer error is operational; the inner one is the configuration's
/// rejection.
pub fn load_for(args: &CheckArgs) -> Result<std::result::Result<ConfigLoader, ConfigError>> {
    if args.path.as_os_str() == "-" {
        let text = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
        Ok(ConfigLoader::from_text(&text))
    } else {
        Ok(ConfigLoader::load(&args.path))
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 on success, 1 if the configuration is rejected.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let loader = match load_for(args)? {
        Ok(loader) => loader,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "configuration rejected");
            println!("{}", render_failure(&e));
            return Ok(1);
        }
    };

    let summary = ConfigSummary::new(loader.path().display().to_string(), loader.config());
    match args.format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(0)
}
