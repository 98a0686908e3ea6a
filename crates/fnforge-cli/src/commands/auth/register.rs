//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fnforge_api::{AuthApi, Registration};

use crate::commands;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let (_store, client) = commands::client()?;

    let registration = Registration {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password.clone(),
        password_confirm: args.password,
    };

    AuthApi::new(client)
        .register(&registration)
        .await
        .context("Failed to register")?;

    output::success("Account created. You can now login.");
    Ok(())
}
