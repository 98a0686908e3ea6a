//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use fnforge_api::AuthApi;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    // Best-effort server-side blacklist; the local session is cleared
    // either way.
    AuthApi::new(client).logout().await;

    output::success("Logged out");
    Ok(())
}
