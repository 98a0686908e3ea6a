//! Whoami command implementation.

use anyhow::{bail, Context, Result};
use clap::Args;

use fnforge_api::AuthApi;
use fnforge_core::SessionStore;

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let (store, client) = commands::client()?;

    if !store.get().is_authenticated() {
        bail!("No active session. Run 'fnforge auth login' first.");
    }

    let profile = AuthApi::new(client)
        .profile()
        .await
        .context("Failed to fetch profile")?;

    output::field("Email", &profile.email);
    if let (Some(first), Some(last)) = (&profile.first_name, &profile.last_name) {
        output::field("Name", &format!("{} {}", first, last));
    }
    output::field("Backend", store.get().base_url.as_str());

    Ok(())
}
