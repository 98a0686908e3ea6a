//! Local configuration commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use fnforge_core::{BaseUrl, SessionStore};

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the stored configuration
    Show,

    /// Set the backend base URL
    SetUrl(SetUrlArgs),
}

#[derive(Args, Debug)]
pub struct SetUrlArgs {
    /// Backend base URL, e.g. http://localhost:8000
    pub url: String,
}

pub async fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(),
        ConfigSubcommand::SetUrl(args) => set_url(args),
    }
}

fn show() -> Result<()> {
    let (store, _client) = commands::client()?;
    let session = store.get();

    output::field("Backend", session.base_url.as_str());
    output::field(
        "Authenticated",
        if session.is_authenticated() { "yes" } else { "no" },
    );

    Ok(())
}

fn set_url(args: SetUrlArgs) -> Result<()> {
    let base_url = BaseUrl::new(&args.url).context("Invalid base URL")?;

    let (store, _client) = commands::client()?;
    let mut session = store.get();
    session.base_url = base_url;
    store.set(session);

    output::success("Backend base URL updated");
    Ok(())
}
