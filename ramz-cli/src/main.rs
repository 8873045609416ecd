//! ramz CLI - Command-line interface
//!
//! This binary exercises the ramz library from the command line: gallery
//! layout, speculative prefetch, contact submission and configuration.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::contact::ContactArgs;
use commands::prefetch::PrefetchArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "ramz")]
#[command(version = ramz::VERSION)]
#[command(about = "Media loading and lead submission tools for the Al-Ramz site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the block layout for a gallery of N items
    Plan {
        /// Number of gallery items
        count: usize,
    },

    /// Run one speculative prefetch and print the resulting load state
    Prefetch(PrefetchArgs),

    /// Validate and submit a contact lead
    Contact(ContactArgs),

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Plan { count } => commands::plan::run(count),
        Commands::Prefetch(args) => commands::prefetch::run(args).await,
        Commands::Contact(args) => commands::contact::run(args).await,
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
