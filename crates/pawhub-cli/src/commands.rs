//! Main commands enum and their arguments.

use clap::{Args, Subcommand};
use pawhub_axum::ServiceKind;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one service (user, pet, gym, blockchain, chat, or all)
    Serve(ServeArgs),

    /// Create a bearer token for a user and print it
    IssueToken(IssueTokenArgs),

    /// Revoke a previously issued bearer token
    RevokeToken(RevokeTokenArgs),

    /// Show resolved paths for the pawhub data directory
    Paths,
}

/// Arguments of `pawhub serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Service to run
    pub service: ServiceKind,

    /// Port to listen on (defaults to the service's own port)
    #[arg(short, long, env = "PAWHUB_PORT")]
    pub port: Option<u16>,

    /// Seconds between heartbeat log lines
    #[arg(long, env = "PAWHUB_HEARTBEAT_SECS")]
    pub heartbeat_secs: Option<u64>,

    /// Delete chat history older than this many days (chat service only)
    #[arg(long, env = "PAWHUB_CHAT_RETENTION_DAYS")]
    pub chat_retention_days: Option<u32>,

    /// Allowed CORS origin; may be repeated. All origins are allowed if omitted.
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

/// Arguments of `pawhub issue-token`.
#[derive(Debug, Clone, Args)]
pub struct IssueTokenArgs {
    /// Login name carried by the token
    #[arg(long)]
    pub username: String,

    /// Numeric user id carried by the token
    #[arg(long)]
    pub user_id: i64,

    /// Extra authority; may be repeated. ROLE_USER is always granted.
    #[arg(long = "authority")]
    pub authorities: Vec<String>,
}

/// Arguments of `pawhub revoke-token`.
#[derive(Debug, Clone, Args)]
pub struct RevokeTokenArgs {
    /// The token as printed by `issue-token`
    pub token: String,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use crate::commands::Commands;
    use clap::Parser;
    use pawhub_axum::ServiceKind;

    #[test]
    fn serve_parses_service_and_port() {
        let cli = Cli::parse_from(["pawhub", "serve", "chat", "--port", "9001"]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.service, ServiceKind::Chat);
        assert_eq!(args.port, Some(9001));
    }

    #[test]
    fn serve_rejects_unknown_service() {
        assert!(Cli::try_parse_from(["pawhub", "serve", "store"]).is_err());
    }

    #[test]
    fn issue_token_collects_authorities() {
        let cli = Cli::parse_from([
            "pawhub",
            "issue-token",
            "--username",
            "alice",
            "--user-id",
            "7",
            "--authority",
            "ROLE_USER",
            "--authority",
            "ROLE_ADMIN",
        ]);
        let Some(Commands::IssueToken(args)) = cli.command else {
            panic!("expected issue-token");
        };
        assert_eq!(args.user_id, 7);
        assert_eq!(args.authorities, ["ROLE_USER", "ROLE_ADMIN"]);
    }

    #[test]
    fn revoke_token_takes_positional_token() {
        let cli = Cli::parse_from(["pawhub", "revoke-token", "abc123"]);
        let Some(Commands::RevokeToken(args)) = cli.command else {
            panic!("expected revoke-token");
        };
        assert_eq!(args.token, "abc123");
    }
}
