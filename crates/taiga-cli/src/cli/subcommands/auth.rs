use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Check credentials against the instance and show who they belong to.
    Login(AuthLoginArgs),
    /// Show the identity of the configured credentials.
    Me,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Taiga username or email (defaults to auth.username).
    #[arg(long)]
    pub username: Option<String>,
    /// Password (defaults to auth.password).
    #[arg(long)]
    pub password: Option<String>,
}
