//! Issue-token command handler.

use anyhow::Result;
use pawhub_core::{AppCore, UserPrincipal};

use crate::bootstrap::CliContext;
use crate::commands::IssueTokenArgs;
use crate::error::CliError;

/// Authority every issued token carries, so it can reach `/api`.
pub const DEFAULT_AUTHORITY: &str = pawhub_axum::auth::REQUIRED_AUTHORITY;

/// Execute the issue-token command. Prints only the token, so the output
/// can be captured by scripts.
pub async fn execute(ctx: &CliContext, args: IssueTokenArgs) -> Result<()> {
    let token = issue(ctx.app(), args).await?;
    println!("{token}");
    Ok(())
}

async fn issue(core: &AppCore, args: IssueTokenArgs) -> Result<String, CliError> {
    let username = args.username.trim();
    if username.is_empty() {
        return Err(CliError::Arguments(
            "--username must not be empty".to_string(),
        ));
    }

    let mut authorities = args.authorities;
    authorities.push(DEFAULT_AUTHORITY.to_string());

    let principal = UserPrincipal::new(username, args.user_id, authorities);
    let token = core.auth().issue_token(&principal).await?;

    tracing::info!(
        username = %username,
        user_id = args.user_id,
        "Issued access token"
    );
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawhub_core::Principal;
    use pawhub_db::TestDb;

    fn args(username: &str, authorities: &[&str]) -> IssueTokenArgs {
        IssueTokenArgs {
            username: username.to_string(),
            user_id: 11,
            authorities: authorities.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn issued_token_authenticates_with_default_authority() {
        tokio_test::block_on(async {
            let db = TestDb::new().await.unwrap();
            let core = db.app_core();

            let token = issue(&core, args("alice", &[])).await.unwrap();
            let principal = core.auth().authenticate(&token).await.unwrap().unwrap();

            assert_eq!(principal.name(), "alice");
            assert_eq!(principal.user_id(), 11);
            assert!(principal.has_authority(DEFAULT_AUTHORITY));
        });
    }

    #[tokio::test]
    async fn extra_authorities_keep_the_default() {
        let db = TestDb::new().await.unwrap();
        let core = db.app_core();

        let token = issue(&core, args("bo", &["ROLE_ADMIN"])).await.unwrap();
        let principal = core.auth().authenticate(&token).await.unwrap().unwrap();

        assert!(principal.has_authority("ROLE_ADMIN"));
        assert!(principal.has_authority(DEFAULT_AUTHORITY));
        assert_eq!(principal.authorities().len(), 2);
    }

    #[tokio::test]
    async fn blank_username_is_an_argument_error() {
        let db = TestDb::new().await.unwrap();
        let err = issue(&db.app_core(), args("  ", &["ROLE_ADMIN"]))
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 2);
    }
}
