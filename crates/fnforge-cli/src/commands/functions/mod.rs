//! Function subcommand implementations.

mod create;
mod delete;
mod deploy;
mod execute;
mod get;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct FunctionsCommand {
    #[command(subcommand)]
    pub command: FunctionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FunctionsSubcommand {
    /// List your functions
    List(list::ListArgs),

    /// Fetch a single function
    Get(get::GetArgs),

    /// Create a function
    Create(create::CreateArgs),

    /// Deploy or undeploy a function
    Deploy(deploy::DeployArgs),

    /// Delete a function
    Delete(delete::DeleteArgs),

    /// Invoke a deployed function by name
    Execute(execute::ExecuteArgs),
}

pub async fn handle(cmd: FunctionsCommand) -> Result<()> {
    match cmd.command {
        FunctionsSubcommand::List(args) => list::run(args).await,
        FunctionsSubcommand::Get(args) => get::run(args).await,
        FunctionsSubcommand::Create(args) => create::run(args).await,
        FunctionsSubcommand::Deploy(args) => deploy::run(args).await,
        FunctionsSubcommand::Delete(args) => delete::run(args).await,
        FunctionsSubcommand::Execute(args) => execute::run(args).await,
    }
}
