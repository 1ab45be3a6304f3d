//! `pawhub` binary.
//!
//! Loads `.env`, initialises logging and dispatches to command handlers.
//! `serve` is the process entry point of every deployable service.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pawhub_cli::error::exit_code_for;
use pawhub_cli::{Cli, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // Bare `pawhub` prints usage
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => handlers::serve::execute(args).await?,
        Commands::IssueToken(args) => {
            let ctx = bootstrap().await?;
            handlers::issue_token::execute(&ctx, args).await?;
        }
        Commands::RevokeToken(args) => {
            let ctx = bootstrap().await?;
            handlers::revoke_token::execute(&ctx, args).await?;
        }
        Commands::Paths => handlers::paths::execute()?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Before parsing, so clap's `env` fallbacks see values from `.env`
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}
