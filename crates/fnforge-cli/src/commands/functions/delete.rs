//! Delete function command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::FunctionsApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Function id
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    FunctionsApi::new(client)
        .delete(&args.id)
        .await
        .context("Failed to delete function")?;

    output::success("Function deleted");
    Ok(())
}
