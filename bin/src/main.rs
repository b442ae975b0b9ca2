//! wattline CLI - Smart factory energy prediction client.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "wattline")]
#[command(about = "Smart factory energy prediction client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress the in-flight spinner)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Prediction service base URL (overrides WATTLINE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an energy forecast for a machine
    Predict {
        /// Machine identifier (e.g., Machine_A). Prompts when omitted.
        machine: Option<String>,

        /// Predict for every known machine
        #[arg(long, conflicts_with = "machine")]
        all: bool,

        /// Override the hour of day (0-23). Defaults to now.
        #[arg(long)]
        hour: Option<u32>,

        /// Override the day of month (1-31). Defaults to today.
        #[arg(long)]
        day: Option<u32>,
    },

    /// List known machines
    Machines {
        /// Ask the service instead of using the built-in set
        #[arg(long)]
        remote: bool,
    },

    /// Check prediction service health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let api_url = cli.api_url.as_deref();

    match command {
        Commands::Predict {
            machine,
            all,
            hour,
            day,
        } => {
            commands::predict::predict(api_url, machine.as_deref(), all, hour, day, cli.quiet)
                .await
        }
        Commands::Machines { remote } => commands::machines::machines(api_url, remote).await,
        Commands::Health => commands::health::health(api_url).await,
    }
}

/// Routes library logs to stderr at a level keyed off the -v count.
/// `RUST_LOG` takes precedence when set.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
