//! Deploy command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::FunctionsApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Function id
    pub id: String,

    /// Undeploy instead of deploying
    #[arg(long)]
    pub undeploy: bool,
}

pub async fn run(args: DeployArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let function = FunctionsApi::new(client)
        .set_active(&args.id, !args.undeploy)
        .await
        .context("Failed to update function")?;

    if function.is_active {
        output::success(&format!("Function '{}' deployed", function.name));
    } else {
        output::success(&format!("Function '{}' undeployed", function.name));
    }

    Ok(())
}
