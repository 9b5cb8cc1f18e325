//! # Schema Subcommand
//!
//! Prints the embedded configuration schema so authors can feed it to an
//! editor or an external validator.

use anyhow::{Context, Result};
use clap::Args;

use lgen_schema::{config_schema, CONFIG_SCHEMA_JSON};

/// Arguments for the `lgen schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Re-indent the schema instead of printing it verbatim.
    #[arg(long)]
    pub pretty: bool,
}

/// Render the schema text for output.
pub fn render_schema(args: &SchemaArgs) -> Result<String> {
    if args.pretty {
        let schema = config_schema().context("embedded schema is not valid JSON")?;
        Ok(serde_json::to_string_pretty(&schema)?)
    } else {
        Ok(CONFIG_SCHEMA_JSON.trim_end().to_string())
    }
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    println!("{}", render_schema(args)?);
    Ok(0)
}
