//! CLI entry point - the composition root.
//!
//! Parses arguments and dispatches to handlers; all wiring of runtime
//! pieces happens inside the handlers themselves since the installer
//! has no long-lived state to compose.

use clap::Parser;

use kitup_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Install(args) => {
            let options = handlers::install::InstallOptions {
                gpu_override: args.gpu_override(),
                update: args.update,
            };
            handlers::install::execute(options).await?;
        }
        Commands::Check => {
            handlers::check::execute()?;
        }
        Commands::Down => {
            handlers::down::execute().await?;
        }
    }

    Ok(())
}
