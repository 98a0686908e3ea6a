//! Execute function command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use fnforge_api::FunctionsApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct ExecuteArgs {
    /// Deployed function name
    pub name: String,

    /// JSON payload passed to the function
    #[arg(long, default_value = "{}")]
    pub payload: String,
}

pub async fn run(args: ExecuteArgs) -> Result<()> {
    let payload: Value =
        serde_json::from_str(&args.payload).context("Invalid JSON payload")?;

    let (_store, client) = commands::client()?;

    let result = FunctionsApi::new(client)
        .execute(&args.name, &payload)
        .await
        .context("Execution failed")?;

    output::json_pretty(&result)
}
