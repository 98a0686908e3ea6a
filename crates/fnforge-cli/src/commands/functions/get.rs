//! Get function command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::FunctionsApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Function id
    pub id: String,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let function = FunctionsApi::new(client)
        .get(&args.id)
        .await
        .context("Failed to fetch function")?;

    output::json_pretty(&function)
}
