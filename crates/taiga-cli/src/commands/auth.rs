use serde::Serialize;
use taiga_config::TaigaConfig;
use taiga_core::Identity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::{AppContext, Credentials};
use crate::output::output;

#[derive(Serialize)]
struct LoginSummary<'a> {
    user: &'a Identity,
    api_url: &'a str,
}

/// Handle `tbm auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &TaigaConfig,
) -> anyhow::Result<()> {
    let credentials = match action {
        AuthCommands::Login(args) => {
            Credentials::resolve(config, args.username.as_deref(), args.password.as_deref())?
        }
        AuthCommands::Me => Credentials::resolve(config, None, None)?,
    };
    let ctx = AppContext::login(config, &credentials, flags).await?;

    match action {
        AuthCommands::Login(_) => output(
            &LoginSummary {
                user: &ctx.session.user,
                api_url: &ctx.session.api_url,
            },
            flags.format,
        ),
        AuthCommands::Me => output(&ctx.session.user, flags.format),
    }
}
