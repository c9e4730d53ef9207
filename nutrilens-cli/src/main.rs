mod client_args;
mod doctor;
mod interactive;
mod render;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::client_args::ClientArgs;
use crate::interactive::InteractiveArgs;
use crate::search::SearchArgs;

#[derive(Parser)]
#[command(name = "nutrilens", version, about = "Nutrition estimates for free-text food descriptions")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once and print the result cards
    Search(SearchArgs),
    /// Search screen on the terminal: search, adjust quantities, switch unit
    Interactive(InteractiveArgs),
    /// Check the API key and run a probe search
    Doctor {
        #[command(flatten)]
        client: ClientArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => search::run_search(args).await,
        Commands::Interactive(args) => interactive::run_interactive(args).await,
        Commands::Doctor { client } => doctor::run_doctor(&client).await,
    }
}

/// The binary is named `nutrilens`, so one directive covers it and the library.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "nutrilens=debug" } else { "nutrilens=info" }
}

// region:    --- Tests


// endregion: --- Tests
