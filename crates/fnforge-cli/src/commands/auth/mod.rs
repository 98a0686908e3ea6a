//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh;
mod register;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Create a new session (login)
    Login(login::LoginArgs),

    /// End the current session
    Logout(logout::LogoutArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Refresh the session tokens
    Refresh(refresh::RefreshArgs),
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
        AuthSubcommand::Register(args) => register::run(args).await,
        AuthSubcommand::Whoami(args) => whoami::run(args).await,
        AuthSubcommand::Refresh(args) => refresh::run(args).await,
    }
}
