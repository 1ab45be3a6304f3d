//! `pawhub revoke-token`.

use anyhow::Result;
use pawhub_core::AppCore;

use crate::bootstrap::CliContext;
use crate::commands::RevokeTokenArgs;
use crate::error::CliError;

pub async fn execute(ctx: &CliContext, args: RevokeTokenArgs) -> Result<()> {
    revoke(ctx.app(), &args.token).await?;
    println!("Token revoked");
    Ok(())
}

async fn revoke(core: &AppCore, token: &str) -> Result<(), CliError> {
    if core.auth().revoke_token(token).await? {
        Ok(())
    } else {
        Err(CliError::Arguments(
            "token is unknown or already revoked".to_string(),
        ))
    }
}
