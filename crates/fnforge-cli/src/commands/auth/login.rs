//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use fnforge_api::AuthApi;
use fnforge_core::{BaseUrl, Credentials, SessionStore};

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend base URL (persisted for later commands)
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let (store, client) = commands::client()?;

    if let Some(url) = &args.base_url {
        let base_url = BaseUrl::new(url).context("Invalid base URL")?;
        let mut session = store.get();
        session.base_url = base_url;
        store.set(session);
    }

    eprintln!("{}", "Logging in...".dimmed());

    let auth = AuthApi::new(client);
    let profile = auth
        .login(&Credentials::new(&args.email, &args.password))
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::field("Email", &profile.email);
    output::field("Backend", store.get().base_url.as_str());

    Ok(())
}
