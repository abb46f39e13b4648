use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use currate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch current prices, for every known currency when no name is given
    Price {
        /// Currency names, matched exactly including whitespace
        names: Vec<String>,
    },
    /// List known currencies and their item ids
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config_path = cli.config_path.as_deref();
    let result = match cli.command {
        Some(Commands::Setup) => currate::cli::setup::setup(),
        Some(Commands::Price { names }) => {
            currate::run_command(currate::AppCommand::Price { names }, config_path).await
        }
        Some(Commands::List) => currate::run_command(currate::AppCommand::List, config_path).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
