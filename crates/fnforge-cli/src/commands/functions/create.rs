//! Create function command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::FunctionsApi;
use fnforge_core::NewFunction;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Function name (also its execution URL segment)
    #[arg(long)]
    pub name: String,

    /// Path to the source file
    #[arg(long)]
    pub code_file: PathBuf,

    /// Implementation language
    #[arg(long, default_value = "python")]
    pub language: String,

    /// Human-readable description
    #[arg(long, default_value = "")]
    pub description: String,

    /// "script" or "database_query"
    #[arg(long, default_value = "script")]
    pub function_type: String,

    /// Deploy immediately
    #[arg(long)]
    pub active: bool,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let code = fs::read_to_string(&args.code_file)
        .with_context(|| format!("Failed to read {}", args.code_file.display()))?;

    let (_store, client) = commands::client()?;

    let function = NewFunction {
        name: args.name,
        description: args.description,
        language: args.language,
        code,
        parameters_schema: serde_json::json!({}),
        function_type: args.function_type,
        is_active: args.active,
    };

    let created = FunctionsApi::new(client)
        .create(&function)
        .await
        .context("Failed to create function")?;

    output::success("Function created");
    output::field("ID", &created.id);
    output::field("Name", &created.name);

    Ok(())
}
